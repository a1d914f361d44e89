//! Rhyme scoring and ranking.
//!
//! A [`RhymeScorer`] blends each candidate's phonetic score with a semantic score
//! computed by a [`SemanticModel`] over word embeddings:
//!
//! - [`CosineSimilarity`]: cosine of the two vectors, rescaled by `(cos + 1) / 2`.
//!   Results are memoized in an order-independent [`SimilarityCache`](crate::cache::SimilarityCache).
//! - [`LearnedSimilarity`]: sigmoid output of a [`RhymeNet`](crate::embedding::RhymeNet)
//!   applied to `base ++ candidate`. Not cached, because the input order matters.
//!
//! # Fail-open
//!
//! Scoring never returns an error. When either word is out of vocabulary, or the
//! similarity is undefined, the combined score is the phonetic score unchanged.
//! The reason is kept in [`ScoredRhyme::semantic`].

pub mod error;
pub mod ranker;
pub mod scorer;
pub mod semantic;
pub mod types;


pub use error::ScoringError;
pub use scorer::RhymeScorer;
pub use semantic::{
    CosineSimilarity, LearnedSimilarity, SemanticModel, cosine_similarity, rescale_cosine,
};
pub use types::{RhymeCandidate, ScoredRhyme, Similarity, blend};
