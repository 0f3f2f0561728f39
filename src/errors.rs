use thiserror::Error;

/// Error type that captures failures at the storage and config boundaries.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Retrieval failed: {0}")]
    Retrieval(String),
    #[error("Persist failed: {0}")]
    Persist(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
