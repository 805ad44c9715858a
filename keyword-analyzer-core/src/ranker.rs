use crate::frequency::Keyword;
use crate::scorer::ScoredKeyword;

/// Orders scored words by score (highest first) and keeps the top `max_keywords`.
///
/// The sort is stable, so equal scores stay in first-occurrence order. The
/// returned rows carry raw counts; scores are only used for ordering.
pub fn rank_keywords(mut scored: Vec<ScoredKeyword>, max_keywords: usize) -> Vec<Keyword> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(max_keywords);

    scored
        .into_iter()
        .map(|s| Keyword {
            word: s.word,
            count: s.count,
        })
        .collect()
}
