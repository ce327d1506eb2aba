use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}
