use crate::frequency::WordCounts;
use crate::options::BonusMatch;
use crate::positional::PositionalSignals;

/// Multiplier for words found in any heading
pub const HEADING_BONUS: f64 = 3.0;
/// Multiplier for words found in the first paragraph
pub const FIRST_PARAGRAPH_BONUS: f64 = 2.0;
/// Upper bound of the length factor
pub const LENGTH_FACTOR_CAP: f64 = 1.5;
/// Relative frequency above which a word is treated as noise
pub const OVER_FREQUENCY_THRESHOLD: f64 = 0.1;
/// Multiplier applied to over-frequent words
pub const OVER_FREQUENCY_PENALTY: f64 = 0.8;

/// A candidate word with its raw count and importance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredKeyword {
    pub word: String,
    pub count: usize,
    pub term_frequency: f64,
    pub score: f64,
}

/// Scores every counted word, keeping first-occurrence order
pub fn score_keywords(
    counts: &WordCounts,
    signals: &PositionalSignals,
    mode: BonusMatch,
) -> Vec<ScoredKeyword> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .map(|(word, count)| {
            let term_frequency = count as f64 / total as f64;
            ScoredKeyword {
                word: word.to_string(),
                count,
                term_frequency,
                score: calculate_score(word, term_frequency, signals, mode),
            }
        })
        .collect()
}

/// Calculates the importance score for a single word
fn calculate_score(word: &str, tf: f64, signals: &PositionalSignals, mode: BonusMatch) -> f64 {
    // 1. Base score is the term frequency
    let mut score = tf;

    // 2. Positional bonuses
    if signals.in_heading(word, mode) {
        score *= HEADING_BONUS;
    }
    if signals.in_first_paragraph(word, mode) {
        score *= FIRST_PARAGRAPH_BONUS;
    }

    // 3. Longer words tend to be more meaningful
    score *= length_factor(word);

    // 4. Penalties
    apply_penalties(tf, score)
}

fn length_factor(word: &str) -> f64 {
    (word.chars().count() as f64 / 10.0).min(LENGTH_FACTOR_CAP)
}

/// Penalizes words that make up too much of the content (likely a repeated brand name)
fn apply_penalties(tf: f64, base_score: f64) -> f64 {
    if tf > OVER_FREQUENCY_THRESHOLD {
        base_score * OVER_FREQUENCY_PENALTY
    } else {
        base_score
    }
}
