//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Embedding dimension string could not be parsed as a number.
    #[error("failed to parse embedding dimension '{value}': {source}")]
    DimParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Embedding dimension must be at least 1.
    #[error("invalid embedding dimension '{value}': must be greater than 0")]
    InvalidEmbeddingDim { value: String },

    /// Scorer name is not one of the supported kinds.
    #[error("unknown scorer '{value}': expected 'cosine' or 'learned'")]
    UnknownScorer { value: String },

    /// The learned scorer was selected without model weights.
    #[error("the learned scorer requires {name} to be set")]
    MissingEnvVar { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is a directory (when an output file was expected).
    #[error("output path is a directory: {path}")]
    OutputIsDirectory { path: PathBuf },
}
