use std::cmp::Ordering;

use super::types::ScoredRhyme;

/// Orders by combined score, highest first.
///
/// `total_cmp` keeps the order total even for non-finite input.
#[inline]
pub fn by_combined_score_desc(a: &ScoredRhyme, b: &ScoredRhyme) -> Ordering {
    b.combined_score.total_cmp(&a.combined_score)
}

/// Sorts in place, highest combined score first.
///
/// The sort is stable: candidates with exactly equal combined scores keep their
/// input order.
pub fn sort_ranked(scored: &mut [ScoredRhyme]) {
    scored.sort_by(by_combined_score_desc);
}

/// Sorts and keeps the best `top_n`.
pub fn top_n(mut scored: Vec<ScoredRhyme>, top_n: usize) -> Vec<ScoredRhyme> {
    sort_ranked(&mut scored);
    scored.truncate(top_n);
    scored
}
