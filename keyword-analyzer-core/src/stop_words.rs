use std::collections::{BTreeSet, HashSet};

use crate::options::AnalysisOptions;

/// Common English function words that never count as keywords
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "that", "have", "for", "not", "with", "you", "this", "but", "his", "from",
    "they", "will", "would", "there", "their", "what", "about", "which", "when", "make", "like",
    "time", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its",
    "over", "think", "also", "back", "after", "use", "two", "how", "our", "work", "first",
    "well", "way", "even", "new", "want", "because", "any", "these", "give", "day", "most",
    "cant",
];

/// Checks if a (lowercase) word is a built-in stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Parses a comma-separated exclusion list into trimmed lowercase words
pub fn parse_exclude_words(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Length and exclusion predicate applied to every token
#[derive(Debug, Clone)]
pub struct WordFilter {
    min_word_length: usize,
    excluded: HashSet<String>,
}

impl WordFilter {
    /// Builds a filter from the built-in stop words plus `extra` exclusions
    pub fn new<I, S>(min_word_length: usize, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut excluded: HashSet<String> = STOP_WORDS.iter().map(|w| w.to_string()).collect();
        excluded.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        Self {
            min_word_length,
            excluded,
        }
    }

    pub fn from_options(options: &AnalysisOptions) -> Self {
        Self::new(options.min_word_length, &options.exclude_words)
    }

    /// True if the token is long enough and not excluded
    pub fn is_retained(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_length && !self.excluded.contains(word)
    }
}
