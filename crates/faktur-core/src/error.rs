use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid invoice date: {0}")]
    InvalidDate(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
