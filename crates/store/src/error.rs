//! Error types for snapshot operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed snapshot: {0}")]
    LoadFormat(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
