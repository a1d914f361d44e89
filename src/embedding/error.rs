use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding table not found at path: {path}")]
    TableNotFound { path: PathBuf },

    #[error("failed to load embedding table: {reason}")]
    TableLoadFailed { reason: String },

    #[error("malformed embedding line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("vector for '{word}' has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("embedding table is empty")]
    EmptyTable,

    #[error("invalid embedding configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::TableLoadFailed {
            reason: err.to_string(),
        }
    }
}
