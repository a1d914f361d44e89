//! Semantic similarity models.
//!
//! A model turns two word vectors into a raw similarity and then maps that raw
//! value onto the `[0, 1]` semantic score used by the blend. The split exists so the
//! scorer can cache raw values and rescale on the way out.

use tracing::warn;

use super::types::Similarity;
use crate::embedding::RhymeNet;

pub trait SemanticModel {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Computes the raw similarity of an ordered pair of vectors.
    ///
    /// Must not panic; undefined results are reported as [`Similarity::Degenerate`].
    fn raw_similarity(&self, base: &[f32], candidate: &[f32]) -> Similarity;

    /// Maps a raw similarity onto `[0, 1]`.
    fn to_semantic_score(&self, raw: f32) -> f32 {
        raw
    }

    /// `true` if `raw_similarity(a, b) == raw_similarity(b, a)` for all inputs.
    ///
    /// Only symmetric models may use the order-independent similarity cache.
    fn is_symmetric(&self) -> bool {
        false
    }
}

/// Cosine similarity of two vectors, or `None` when undefined.
///
/// Undefined means mismatched lengths, empty input, a zero-norm vector, or a
/// non-finite result. Values are clamped to `[-1, 1]` to absorb float rounding.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let denom = norm_a_sq.sqrt() * norm_b_sq.sqrt();
    if denom == 0.0 {
        return None;
    }

    let cos = dot / denom;
    cos.is_finite().then(|| cos.clamp(-1.0, 1.0))
}

/// Maps cosine similarity from `[-1, 1]` onto `[0, 1]`.
#[inline]
pub fn rescale_cosine(cos: f32) -> f32 {
    (cos + 1.0) / 2.0
}

#[derive(Debug, Clone, Copy, Default)]
/// Cosine similarity rescaled by `(cos + 1) / 2`.
pub struct CosineSimilarity;

impl SemanticModel for CosineSimilarity {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn raw_similarity(&self, base: &[f32], candidate: &[f32]) -> Similarity {
        match cosine_similarity(base, candidate) {
            Some(cos) => Similarity::Scored(cos),
            None => Similarity::Degenerate,
        }
    }

    fn to_semantic_score(&self, raw: f32) -> f32 {
        rescale_cosine(raw)
    }

    fn is_symmetric(&self) -> bool {
        true
    }
}

/// Semantic score produced by a trained [`RhymeNet`].
///
/// The network's sigmoid output is already in `[0, 1]`, so no rescaling is applied.
/// Input is `base ++ candidate`, which makes the model order-dependent.
#[derive(Debug)]
pub struct LearnedSimilarity {
    net: RhymeNet,
}

impl LearnedSimilarity {
    pub fn new(net: RhymeNet) -> Self {
        Self { net }
    }

    pub fn net(&self) -> &RhymeNet {
        &self.net
    }
}

impl SemanticModel for LearnedSimilarity {
    fn name(&self) -> &'static str {
        "learned"
    }

    fn raw_similarity(&self, base: &[f32], candidate: &[f32]) -> Similarity {
        match self.net.score(base, candidate) {
            Ok(score) if score.is_finite() => Similarity::Scored(score.clamp(0.0, 1.0)),
            Ok(score) => {
                warn!(score, "Rhyme net produced a non-finite score");
                Similarity::Degenerate
            }
            Err(e) => {
                warn!(error = %e, "Rhyme net inference failed, falling back to phonetic score");
                Similarity::Degenerate
            }
        }
    }
}
