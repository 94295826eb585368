use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::TcError;
use tc_routing::RoutingError;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Config(#[from] TcError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

pub type IoResult<T> = Result<T, IoError>;
