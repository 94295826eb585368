//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `TcError` as one variant
//! where a core failure (bad settings, malformed input) can reach them.

use thiserror::Error;

/// The top-level error type for `tc-core`.
#[derive(Debug, Error)]
pub enum TcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tc-core`.
pub type TcResult<T> = Result<T, TcError>;
