use log::debug;
use rayon::prelude::*;

// Internal modules (private)
mod frequency;
mod options;
mod positional;
mod ranker;
mod related;
mod scorer;
mod settings;
mod stop_words;
mod tokenizer;

// Re-export public types
pub use frequency::{Keyword, WordCounts};
pub use options::{
    AnalysisOptions, BonusMatch, DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_WORD_LENGTH,
    DEFAULT_RELATED_COUNT,
};
pub use positional::PositionalSignals;
pub use related::split_sentences;
pub use settings::{DisplayMethod, KeywordSettings, DEFAULT_EXCLUDE_WORDS};
pub use stop_words::{is_stop_word, parse_exclude_words, STOP_WORDS};
pub use tokenizer::{normalize, strip_markup, tokenize};

/// Below this many distinct words, scoring is skipped and raw counts are returned
pub const SPARSE_THRESHOLD: usize = 5;

/// Tokenizes, filters and counts the words of `content`
pub fn word_frequencies(content: &str, options: &AnalysisOptions) -> WordCounts {
    let tokens = tokenizer::tokenize(content);
    let filter = stop_words::WordFilter::from_options(options);
    let counts = frequency::count_words(&tokens, &filter);

    debug!(
        "Counted {} distinct words ({} of {} tokens kept)",
        counts.len(),
        counts.total(),
        tokens.len()
    );

    counts
}

/// Ranks the keywords of `content` by importance.
///
/// Each row carries the word's raw occurrence count. With fewer than
/// [`SPARSE_THRESHOLD`] distinct words the raw counts are returned in
/// first-occurrence order instead of being scored.
pub fn analyze(content: &str, options: &AnalysisOptions) -> Vec<Keyword> {
    let counts = word_frequencies(content, options);

    if counts.len() < SPARSE_THRESHOLD {
        debug!("Only {} distinct words, skipping scoring", counts.len());
        let mut keywords = counts.into_keywords();
        keywords.truncate(options.max_keywords);
        return keywords;
    }

    let signals = PositionalSignals::extract(content);
    let scored = scorer::score_keywords(&counts, &signals, options.bonus_match);
    ranker::rank_keywords(scored, options.max_keywords)
}

/// Ranks keywords by raw count alone, without positional scoring
pub fn top_keywords_by_frequency(content: &str, options: &AnalysisOptions) -> Vec<Keyword> {
    let mut keywords = word_frequencies(content, options).into_sorted_by_count();
    keywords.truncate(options.max_keywords);
    keywords
}

/// Finds up to `count` words sharing sentences with `keyword`
pub fn related_keywords(content: &str, keyword: &str, count: usize) -> Vec<Keyword> {
    related::find_related_keywords(content, keyword, count)
}

/// Keyword engine bound to one set of options
#[derive(Debug, Clone, Default)]
pub struct KeywordAnalyzer {
    options: AnalysisOptions,
}

impl KeywordAnalyzer {
    /// Create a new analyzer with the given options
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Create an analyzer from a settings record
    pub fn from_settings(settings: &KeywordSettings) -> Self {
        Self::new(settings.to_options())
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn analyze(&self, content: &str) -> Vec<Keyword> {
        analyze(content, &self.options)
    }

    pub fn word_frequencies(&self, content: &str) -> WordCounts {
        word_frequencies(content, &self.options)
    }

    pub fn top_keywords_by_frequency(&self, content: &str) -> Vec<Keyword> {
        top_keywords_by_frequency(content, &self.options)
    }

    /// Related keywords ignore this analyzer's options: words shorter than
    /// four characters and the focal keyword itself are always dropped.
    pub fn related_keywords(&self, content: &str, keyword: &str, count: usize) -> Vec<Keyword> {
        related_keywords(content, keyword, count)
    }

    /// Analyze many documents in parallel; results keep the input order
    pub fn analyze_batch<T>(&self, documents: &[T]) -> Vec<Vec<Keyword>>
    where
        T: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.analyze(doc.as_ref()))
            .collect()
    }
}
