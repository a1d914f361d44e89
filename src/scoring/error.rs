use thiserror::Error;

use crate::embedding::{EmbeddingError, RhymeNetError};

/// Errors raised while *building* a scorer.
///
/// Scoring itself never fails; missing or degenerate embeddings fall back to the
/// phonetic score.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("rhyme net error: {0}")]
    RhymeNet(#[from] RhymeNetError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("model expects {expected}-dimensional vectors but the embedding table has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
