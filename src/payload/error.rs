use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request has no base word")]
    MissingBaseWord,

    #[error("candidate '{word}' has phonetic score {score}, expected a value in [0, 1]")]
    InvalidPhoneticScore { word: String, score: f32 },

    #[error("candidate at position {index} has an empty word")]
    EmptyCandidateWord { index: usize },

    #[error("input is empty")]
    EmptyInput,

    #[error("unknown result format '{value}' (expected 'tsv' or 'csv')")]
    UnknownFormat { value: String },
}
