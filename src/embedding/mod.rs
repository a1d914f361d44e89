//! Word embeddings and the learned pair model.
//!
//! - [`EmbeddingProvider`] is the single lookup capability the scorer needs.
//! - [`table`] provides an in-memory provider loaded from GloVe/word2vec text.
//! - [`rhyme_net`] provides the feed-forward pair model used by the learned scorer.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Feed-forward network module definition.
pub mod pair_mlp;
/// Learned pair scorer (weights + inference).
pub mod rhyme_net;
/// In-memory embedding table.
pub mod table;

#[cfg(test)]
mod tests;

pub use error::EmbeddingError;
pub use rhyme_net::{RhymeNet, RhymeNetConfig, RhymeNetError};
pub use table::EmbeddingTable;

/// Source of word vectors.
///
/// Implementations are read-only; the scorer only borrows them.
pub trait EmbeddingProvider {
    /// Returns the vector for `word`, or `None` if it is out of vocabulary.
    ///
    /// Implementations must case-fold `word` before lookup.
    fn vector_for(&self, word: &str) -> Option<&[f32]>;

    /// Dimension of every vector this provider returns.
    fn dim(&self) -> usize;

    fn contains(&self, word: &str) -> bool {
        self.vector_for(word).is_some()
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for &T {
    fn vector_for(&self, word: &str) -> Option<&[f32]> {
        (**self).vector_for(word)
    }

    fn dim(&self) -> usize {
        (**self).dim()
    }
}
