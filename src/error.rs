use thiserror::Error;

/// Failures at the record store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("meal log query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("meal records could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
