use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RhymeNetError {
    #[error("rhyme net weights not found at path: {path}")]
    WeightsNotFound { path: PathBuf },

    #[error("failed to load rhyme net: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("rhyme net inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("input vector has dimension {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid rhyme net configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for RhymeNetError {
    fn from(err: candle_core::Error) -> Self {
        RhymeNetError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
