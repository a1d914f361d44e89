//! Cross-cutting, shared constants.
//!
//! The blend weights and the network shape are fixed for compatibility with
//! previously trained weight files and previously published score tables.
//!
//! # Dimension Invariants
//!
//! The embedding dimension is set by the embedding table that is loaded at startup.
//! The learned model consumes a concatenated pair, so its input width is always twice
//! the table dimension. Use [`DimConfig`] to carry the dimension through initialization
//! and [`validate_embedding_dim`] at module boundaries.

/// Weight of the phonetic score in the combined score.
pub const PHONETIC_WEIGHT: f32 = 0.7;

/// Weight of the semantic score in the combined score.
pub const SEMANTIC_WEIGHT: f32 = 0.3;

/// Dimension of the default GloVe (twitter, 25d) table.
pub const DEFAULT_EMBEDDING_DIM: usize = 25;

pub const RHYME_NET_HIDDEN_DIM: usize = 64;
pub const RHYME_NET_BOTTLENECK_DIM: usize = 32;

/// Dropout probability used by the learned model while training (inference disables it).
pub const RHYME_NET_DROPOUT: f32 = 0.2;

/// Phonetic score assigned to candidates read from plain word lists.
pub const DEFAULT_PHONETIC_SCORE: f32 = 0.9;

/// Runtime dimension configuration shared by the embedding table and the learned model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimConfig {
    /// The embedding vector dimension (number of floats per word).
    pub embedding_dim: usize,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl DimConfig {
    /// Creates a new dimension configuration with the specified embedding dimension.
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    /// Returns an error if `embedding_dim` is zero.
    pub fn validate(&self) -> Result<(), DimValidationError> {
        if self.embedding_dim == 0 {
            return Err(DimValidationError::ZeroDimension);
        }
        Ok(())
    }

    /// Width of a concatenated word pair (the learned model's input).
    pub fn pair_dim(&self) -> usize {
        self.embedding_dim * 2
    }
}

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use rhyme::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// let table_dim = 25;
/// validate_embedding_dim(table_dim, DEFAULT_EMBEDDING_DIM).unwrap();
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
