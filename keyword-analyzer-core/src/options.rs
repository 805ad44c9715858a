use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::stop_words::parse_exclude_words;

/// Default minimum word length (in characters)
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
/// Default number of keywords returned by an analysis
pub const DEFAULT_MAX_KEYWORDS: usize = 10;
/// Default number of related keywords
pub const DEFAULT_RELATED_COUNT: usize = 5;

/// How a word is matched against heading and first-paragraph text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusMatch {
    /// Plain substring containment: "art" matches inside "party"
    #[default]
    Substring,
    /// The word must appear as a whole token
    WholeWord,
}

/// Per-call analysis configuration
///
/// Never mutated by the engine. Values are assumed to be resolved already
/// (see [`crate::KeywordSettings::to_options`] for default substitution).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Words shorter than this are ignored
    pub min_word_length: usize,
    /// Upper bound on the number of ranked keywords (0 yields an empty result)
    pub max_keywords: usize,
    /// Lowercase words excluded in addition to the built-in stop words
    pub exclude_words: BTreeSet<String>,
    /// Matching mode for the heading and first-paragraph bonuses
    pub bonus_match: BonusMatch,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            exclude_words: BTreeSet::new(),
            bonus_match: BonusMatch::Substring,
        }
    }
}

impl AnalysisOptions {
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Adds words from a comma-separated list (case-insensitive, trimmed)
    pub fn with_exclude_words(mut self, list: &str) -> Self {
        self.exclude_words.extend(parse_exclude_words(list));
        self
    }

    pub fn with_bonus_match(mut self, bonus_match: BonusMatch) -> Self {
        self.bonus_match = bonus_match;
        self
    }
}
