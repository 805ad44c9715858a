use log::debug;
use regex::Regex;

use crate::frequency::{count_words, Keyword};
use crate::options::DEFAULT_MIN_WORD_LENGTH;
use crate::stop_words::WordFilter;
use crate::tokenizer::{strip_markup, tokenize};

lazy_static::lazy_static! {
    static ref SENTENCE_BOUNDARY_RE: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Splits text after `.`, `!` or `?` followed by whitespace.
/// Terminal punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        // The terminator is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
}

/// Finds words that co-occur with `keyword` in the same sentences.
///
/// Only sentences containing the keyword (as a substring) are analysed. The
/// keyword itself is excluded and results are ranked by raw count, most
/// frequent first, with ties in first-occurrence order.
pub fn find_related_keywords(content: &str, keyword: &str, count: usize) -> Vec<Keyword> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || count == 0 {
        return Vec::new();
    }

    let text = strip_markup(content).to_lowercase();
    let relevant: Vec<&str> = split_sentences(&text)
        .into_iter()
        .filter(|sentence| sentence.contains(keyword.as_str()))
        .collect();

    if relevant.is_empty() {
        debug!("No sentences mention '{}'", keyword);
        return Vec::new();
    }

    debug!("Found {} sentence(s) mentioning '{}'", relevant.len(), keyword);

    let filter = WordFilter::new(DEFAULT_MIN_WORD_LENGTH, [keyword.as_str()]);
    let counts = count_words(tokenize(&relevant.join(" ")), &filter);

    let mut related = counts.into_sorted_by_count();
    related.truncate(count);
    related
}
