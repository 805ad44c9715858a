use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::stop_words::WordFilter;

/// A keyword paired with its raw occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

impl Keyword {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Word -> occurrence count, remembering first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the filtered word total)
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Converts into keyword rows in first-occurrence order
    pub fn into_keywords(self) -> Vec<Keyword> {
        self.entries
            .into_iter()
            .map(|(word, count)| Keyword { word, count })
            .collect()
    }

    /// Converts into keyword rows sorted by count, most frequent first.
    /// Equal counts keep first-occurrence order.
    pub fn into_sorted_by_count(self) -> Vec<Keyword> {
        let mut keywords = self.into_keywords();
        keywords.sort_by(|a, b| b.count.cmp(&a.count));
        keywords
    }
}

/// Counts tokens that pass the filter
pub fn count_words<I, S>(tokens: I, filter: &WordFilter) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = WordCounts::new();
    for token in tokens {
        let word = token.as_ref();
        if filter.is_retained(word) {
            counts.add(word);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_extra_filter(min_word_length: usize) -> WordFilter {
        WordFilter::new(min_word_length, Vec::<String>::new())
    }

    #[test]
    fn test_count_words_accumulates() {
        let tokens = ["plugin", "content", "plugin", "the", "cat", "plugin"];
        let counts = count_words(tokens, &no_extra_filter(4));

        assert_eq!(counts.get("plugin"), Some(3));
        assert_eq!(counts.get("content"), Some(1));
        assert_eq!(counts.get("the"), None, "stop word should be skipped");
        assert_eq!(counts.get("cat"), None, "short word should be skipped");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_first_occurrence_order() {
        let tokens = ["zebra", "apple", "zebra", "mango"];
        let counts = count_words(tokens, &no_extra_filter(1));
        let order: Vec<&str> = counts.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_counts_are_order_independent() {
        let a = count_words(["alpha", "beta", "alpha"], &no_extra_filter(1));
        let b = count_words(["beta", "alpha", "alpha"], &no_extra_filter(1));
        assert_eq!(a.get("alpha"), b.get("alpha"));
        assert_eq!(a.get("beta"), b.get("beta"));
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn test_into_sorted_by_count_is_stable() {
        let tokens = ["north", "south", "east", "south", "east", "west"];
        let sorted = count_words(tokens, &no_extra_filter(1)).into_sorted_by_count();
        assert_eq!(
            sorted,
            vec![
                Keyword::new("south", 2),
                Keyword::new("east", 2),
                Keyword::new("north", 1),
                Keyword::new("west", 1),
            ]
        );
    }

    #[test]
    fn test_empty_counts() {
        let counts = count_words(Vec::<String>::new(), &no_extra_filter(4));
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert!(counts.into_keywords().is_empty());
    }
}
