//! Pairwise similarity memoization.
//!
//! Entries are keyed by a BLAKE3 hash of the sorted, lowercased word pair (see
//! [`crate::hashing::hash_word_pair`]), so `(A, B)` and `(B, A)` share one slot.

pub mod similarity;


pub use similarity::{SimilarityCache, SimilarityCacheHandle};
