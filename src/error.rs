use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced to `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No paronym pair with id {0}")]
    UnknownPair(u32),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UnknownPair(_) => 2,
            _ => 1,
        }
    }
}
