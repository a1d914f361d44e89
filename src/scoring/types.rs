use serde::{Deserialize, Serialize};

use crate::constants::{PHONETIC_WEIGHT, SEMANTIC_WEIGHT};

/// Blends a phonetic and a semantic score: `0.7 * phonetic + 0.3 * semantic`.
#[inline]
pub fn blend(phonetic_score: f32, semantic_score: f32) -> f32 {
    PHONETIC_WEIGHT * phonetic_score + SEMANTIC_WEIGHT * semantic_score
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outcome of a semantic similarity lookup.
pub enum Similarity {
    /// Both words were embedded and the computation produced a finite value.
    Scored(f32),
    /// At least one word has no embedding.
    OutOfVocabulary,
    /// Embeddings existed but the computation was undefined (zero-norm vector,
    /// mismatched dimensions, non-finite output, model failure).
    Degenerate,
}

impl Similarity {
    /// Returns the value if scored.
    #[inline]
    pub fn value(&self) -> Option<f32> {
        match self {
            Similarity::Scored(v) => Some(*v),
            Similarity::OutOfVocabulary | Similarity::Degenerate => None,
        }
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        matches!(self, Similarity::Scored(_))
    }

    /// Applies `f` to a scored value, leaving fallbacks untouched.
    #[inline]
    pub fn map(self, f: impl FnOnce(f32) -> f32) -> Similarity {
        match self {
            Similarity::Scored(v) => Similarity::Scored(f(v)),
            other => other,
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            Similarity::Scored(_) => "SCORED",
            Similarity::OutOfVocabulary => "OUT_OF_VOCABULARY",
            Similarity::Degenerate => "DEGENERATE",
        }
    }
}

impl std::fmt::Display for Similarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Similarity::Scored(v) => write!(f, "SCORED ({:.4})", v),
            other => write!(f, "{}", other.debug_status()),
        }
    }
}

/// A candidate rhyme with its externally computed phonetic score.
///
/// Serializes as a `[word, score]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f32)", into = "(String, f32)")]
pub struct RhymeCandidate {
    pub word: String,
    pub phonetic_score: f32,
}

impl RhymeCandidate {
    pub fn new(word: impl Into<String>, phonetic_score: f32) -> Self {
        Self {
            word: word.into(),
            phonetic_score,
        }
    }
}

impl From<(String, f32)> for RhymeCandidate {
    fn from((word, phonetic_score): (String, f32)) -> Self {
        Self {
            word,
            phonetic_score,
        }
    }
}

impl From<(&str, f32)> for RhymeCandidate {
    fn from((word, phonetic_score): (&str, f32)) -> Self {
        Self::new(word, phonetic_score)
    }
}

impl From<RhymeCandidate> for (String, f32) {
    fn from(candidate: RhymeCandidate) -> Self {
        (candidate.word, candidate.phonetic_score)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Candidate annotated with its semantic outcome and combined score.
pub struct ScoredRhyme {
    /// Candidate word as supplied (not case-folded).
    pub word: String,
    /// Phonetic score as supplied.
    pub phonetic_score: f32,
    /// Semantic score in [0, 1], or the reason there is none.
    pub semantic: Similarity,
    /// `blend(phonetic, semantic)`, or the phonetic score when `semantic` is not scored.
    pub combined_score: f32,
}

impl ScoredRhyme {
    /// Applies the fail-open rule: without a semantic score the combined score is
    /// the phonetic score, unchanged.
    pub fn new(word: impl Into<String>, phonetic_score: f32, semantic: Similarity) -> Self {
        let combined_score = match semantic {
            Similarity::Scored(semantic_score) => blend(phonetic_score, semantic_score),
            Similarity::OutOfVocabulary | Similarity::Degenerate => phonetic_score,
        };

        Self {
            word: word.into(),
            phonetic_score,
            semantic,
            combined_score,
        }
    }

    pub fn semantic_score(&self) -> Option<f32> {
        self.semantic.value()
    }

    /// Returns `true` if the semantic signal contributed to the combined score.
    pub fn is_blended(&self) -> bool {
        self.semantic.is_scored()
    }

    /// Drops the breakdown and returns `(word, combined_score)`.
    pub fn into_pair(self) -> (String, f32) {
        (self.word, self.combined_score)
    }
}
