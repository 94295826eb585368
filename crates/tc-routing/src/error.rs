//! Routing-subsystem error type.

use thiserror::Error;

use tc_core::TcError;

/// Errors produced while building a transit graph.
///
/// Queries never fail: an unreachable destination is `None`, and an
/// out-of-range vertex is a caller bug that panics.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid routing settings: {0}")]
    Config(#[from] TcError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
