use tracing::debug;

use crate::cache::SimilarityCacheHandle;
use crate::embedding::{EmbeddingProvider, RhymeNet};

use super::error::ScoringError;
use super::ranker;
use super::semantic::{CosineSimilarity, LearnedSimilarity, SemanticModel};
use super::types::{RhymeCandidate, ScoredRhyme, Similarity};

/// Scores and ranks rhyme candidates against a base word.
///
/// Borrows a read-only embedding provider and owns its similarity cache. The cache
/// lives as long as the scorer; dropping the scorer releases it (unless it was
/// shared through [`with_cache`](Self::with_cache)).
pub struct RhymeScorer<'a, P: EmbeddingProvider + ?Sized, M: SemanticModel = CosineSimilarity> {
    provider: &'a P,
    model: M,
    cache: SimilarityCacheHandle,
}

impl<P: EmbeddingProvider + ?Sized, M: SemanticModel> std::fmt::Debug for RhymeScorer<'_, P, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RhymeScorer")
            .field("model", &self.model.name())
            .field("embedding_dim", &self.provider.dim())
            .field("cache", &self.cache)
            .finish()
    }
}

impl<'a, P: EmbeddingProvider + ?Sized> RhymeScorer<'a, P, CosineSimilarity> {
    /// Cosine-similarity scorer.
    pub fn cosine(provider: &'a P) -> Self {
        Self::with_model(provider, CosineSimilarity)
    }
}

impl<'a, P: EmbeddingProvider + ?Sized> RhymeScorer<'a, P, LearnedSimilarity> {
    /// Learned-model scorer. Fails if the network's input width does not fit the
    /// provider's vectors.
    pub fn learned(provider: &'a P, net: RhymeNet) -> Result<Self, ScoringError> {
        if net.embedding_dim() != provider.dim() {
            return Err(ScoringError::DimensionMismatch {
                expected: net.embedding_dim(),
                actual: provider.dim(),
            });
        }

        Ok(Self::with_model(provider, LearnedSimilarity::new(net)))
    }
}

impl<'a, P: EmbeddingProvider + ?Sized, M: SemanticModel> RhymeScorer<'a, P, M> {
    pub fn with_model(provider: &'a P, model: M) -> Self {
        Self {
            provider,
            model,
            cache: SimilarityCacheHandle::new(),
        }
    }

    /// Replaces the private cache with a shared one.
    ///
    /// Only share between scorers that use the same model over the same table;
    /// the cache holds raw model output.
    pub fn with_cache(mut self, cache: SimilarityCacheHandle) -> Self {
        self.cache = cache;
        self
    }

    /// Raw similarity of the pair, consulting the cache for symmetric models.
    pub fn similarity(&self, base_word: &str, candidate_word: &str) -> Similarity {
        let cacheable = self.model.is_symmetric();

        if cacheable && let Some(raw) = self.cache.lookup(base_word, candidate_word) {
            debug!(base_word, candidate_word, raw, "Similarity cache hit");
            return Similarity::Scored(raw);
        }

        let (Some(base), Some(candidate)) = (
            self.provider.vector_for(base_word),
            self.provider.vector_for(candidate_word),
        ) else {
            debug!(base_word, candidate_word, "Out of vocabulary");
            return Similarity::OutOfVocabulary;
        };

        let similarity = self.model.raw_similarity(base, candidate);

        if cacheable && let Similarity::Scored(raw) = similarity {
            self.cache.store(base_word, candidate_word, raw);
        }

        similarity
    }

    /// Semantic score in `[0, 1]`.
    pub fn semantic_score(&self, base_word: &str, candidate_word: &str) -> Similarity {
        self.similarity(base_word, candidate_word)
            .map(|raw| self.model.to_semantic_score(raw))
    }

    /// `0.7 * phonetic + 0.3 * semantic`, or `phonetic_score` unchanged when the
    /// semantic score is unavailable.
    pub fn combined_score(&self, base_word: &str, candidate_word: &str, phonetic_score: f32) -> f32 {
        self.score_candidate(base_word, &RhymeCandidate::new(candidate_word, phonetic_score))
            .combined_score
    }

    pub fn score_candidate(&self, base_word: &str, candidate: &RhymeCandidate) -> ScoredRhyme {
        let semantic = self.semantic_score(base_word, &candidate.word);
        let scored = ScoredRhyme::new(candidate.word.clone(), candidate.phonetic_score, semantic);

        debug!(
            base_word,
            candidate = %scored.word,
            phonetic = scored.phonetic_score,
            semantic = %scored.semantic,
            combined = scored.combined_score,
            "Scored candidate"
        );

        scored
    }

    /// Scores every candidate, preserving input order.
    pub fn score_candidates(
        &self,
        base_word: &str,
        candidates: &[RhymeCandidate],
    ) -> Vec<ScoredRhyme> {
        candidates
            .iter()
            .map(|candidate| self.score_candidate(base_word, candidate))
            .collect()
    }

    /// Scores and sorts candidates, highest combined score first.
    ///
    /// Exact ties keep input order. An empty candidate list yields an empty result.
    pub fn rank(&self, base_word: &str, candidates: &[RhymeCandidate]) -> Vec<ScoredRhyme> {
        if candidates.is_empty() {
            debug!(base_word, "No candidates to rank");
            return vec![];
        }

        let mut scored = self.score_candidates(base_word, candidates);
        ranker::sort_ranked(&mut scored);

        debug!(
            base_word,
            num_candidates = scored.len(),
            model = self.model.name(),
            top_score = scored.first().map(|s| s.combined_score),
            "Ranking complete"
        );

        scored
    }

    /// Like [`rank`](Self::rank) but keeps only the best `top_n`.
    pub fn rank_top_n(
        &self,
        base_word: &str,
        candidates: &[RhymeCandidate],
        top_n: usize,
    ) -> Vec<ScoredRhyme> {
        ranker::top_n(self.score_candidates(base_word, candidates), top_n)
    }

    pub fn provider(&self) -> &'a P {
        self.provider
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn cache(&self) -> &SimilarityCacheHandle {
        &self.cache
    }
}
