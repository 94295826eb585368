//! Registry error type.

use thiserror::Error;

/// Errors produced by `tc-catalogue`.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// A bus or distance entry names a stop that was never added.
    #[error("stop {0:?} is not registered")]
    UnknownStop(String),

    /// Neither direction of a traversed segment has a measured road distance.
    #[error("no road distance recorded between {from:?} and {to:?} in either direction")]
    MissingDistance { from: String, to: String },

    #[error("bus {0:?} is already registered")]
    DuplicateBus(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
