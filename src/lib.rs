//! Rhyme candidate ranking.
//!
//! Candidates come with a phonetic score from an upstream rhyme finder. Each one
//! is blended with a semantic score computed from word embeddings,
//! `0.7 * phonetic + 0.3 * semantic`, and the list is sorted best first.
//!
//! ## Modules
//! - [`scoring`]: [`RhymeScorer`], semantic models, and the ranker
//! - [`embedding`]: [`EmbeddingTable`] and the learned [`RhymeNet`]
//! - [`cache`]: the symmetric similarity cache owned by each scorer
//! - [`rhymes`]: [`RhymeMap`] for finding perfect rhymes from a pronouncing dictionary
//! - [`payload`]: request and result file formats
//! - [`config`]: `RHYME_*` environment configuration
//!
//! ## Example
//!
//! ```
//! use rhyme::{EmbeddingTable, RhymeCandidate, RhymeScorer};
//!
//! let table = EmbeddingTable::from_entries(
//!     2,
//!     [("light", vec![1.0, 0.0]), ("bright", vec![1.0, 0.1])],
//! )
//! .unwrap();
//!
//! let scorer = RhymeScorer::cosine(&table);
//! let ranked = scorer.rank(
//!     "light",
//!     &[RhymeCandidate::new("bright", 0.9), RhymeCandidate::new("zzyzx", 0.95)],
//! );
//!
//! assert_eq!(ranked[0].word, "zzyzx");
//! assert_eq!(ranked[0].combined_score, 0.95);
//! ```

pub mod cache;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod payload;
pub mod rhymes;
pub mod scoring;

pub use cache::{SimilarityCache, SimilarityCacheHandle};
pub use config::{Config, ConfigError, ScorerKind};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_PHONETIC_SCORE, DimConfig, DimValidationError,
    PHONETIC_WEIGHT, SEMANTIC_WEIGHT, validate_embedding_dim,
};
pub use embedding::{
    EmbeddingError, EmbeddingProvider, EmbeddingTable, RhymeNet, RhymeNetConfig, RhymeNetError,
};
pub use hashing::{hash_word_pair, normalize_word};
pub use payload::{PayloadError, ResultFormat, RhymeRequest};
pub use rhymes::{RhymeMap, RhymeMapError, rhyme_part};
pub use scoring::{
    CosineSimilarity, LearnedSimilarity, RhymeCandidate, RhymeScorer, ScoredRhyme, ScoringError,
    SemanticModel, Similarity, blend, cosine_similarity, rescale_cosine,
};
