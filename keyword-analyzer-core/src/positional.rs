use log::debug;
use regex::Regex;
use std::collections::HashSet;

use crate::options::BonusMatch;
use crate::tokenizer::{strip_markup, tokenize};

lazy_static::lazy_static! {
    static ref HEADING_RE: Regex = Regex::new(r"(?is)<h[1-6]\b[^>]*>(.*?)</h[1-6]\s*>").unwrap();
    static ref PARAGRAPH_RE: Regex = Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").unwrap();
}

/// Heading and first-paragraph text pulled from unstripped markup
#[derive(Debug, Clone, Default)]
pub struct PositionalSignals {
    heading_text: String,
    first_paragraph_text: String,
    heading_words: HashSet<String>,
    first_paragraph_words: HashSet<String>,
}

impl PositionalSignals {
    /// Extracts signals from unstripped content. Plain text yields empty signals.
    pub fn extract(content: &str) -> Self {
        let headings: Vec<&str> = HEADING_RE
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        let heading_text = strip_markup(&headings.join(" ")).to_lowercase();

        let first_paragraph_text = PARAGRAPH_RE
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| strip_markup(m.as_str()).to_lowercase())
            .unwrap_or_default();

        debug!(
            "Positional signals: {} heading(s), first paragraph {} chars",
            headings.len(),
            first_paragraph_text.chars().count()
        );

        Self {
            heading_words: tokenize(&heading_text).into_iter().collect(),
            first_paragraph_words: tokenize(&first_paragraph_text).into_iter().collect(),
            heading_text,
            first_paragraph_text,
        }
    }

    /// Concatenated, lowercased text of every h1-h6 element
    pub fn heading_text(&self) -> &str {
        &self.heading_text
    }

    /// Lowercased text of the first paragraph (empty if there is none)
    pub fn first_paragraph_text(&self) -> &str {
        &self.first_paragraph_text
    }

    pub fn in_heading(&self, word: &str, mode: BonusMatch) -> bool {
        matches_text(&self.heading_text, &self.heading_words, word, mode)
    }

    pub fn in_first_paragraph(&self, word: &str, mode: BonusMatch) -> bool {
        matches_text(&self.first_paragraph_text, &self.first_paragraph_words, word, mode)
    }
}

fn matches_text(text: &str, words: &HashSet<String>, word: &str, mode: BonusMatch) -> bool {
    if word.is_empty() {
        return false;
    }
    match mode {
        BonusMatch::Substring => text.contains(word),
        BonusMatch::WholeWord => words.contains(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_all_levels() {
        let content = "<h1>Main Title</h1><p>intro</p><h3 class=\"sub\">Sub <em>Heading</em></h3>\
                       <h6>Tiny</h6>";
        let signals = PositionalSignals::extract(content);
        assert_eq!(signals.heading_text(), "main title sub heading tiny");
    }

    #[test]
    fn test_extract_first_paragraph_only() {
        let content = "<p class=\"lead\">First <b>Paragraph</b> here.</p><p>Second one.</p>";
        let signals = PositionalSignals::extract(content);
        assert_eq!(signals.first_paragraph_text(), "first paragraph here.");
    }

    #[test]
    fn test_multiline_elements() {
        let content = "<H2>\n  Spanning\n  Lines\n</H2>\n<P>\nBody text\n</P>";
        let signals = PositionalSignals::extract(content);
        assert!(signals.heading_text().contains("spanning"));
        assert!(signals.first_paragraph_text().contains("body text"));
    }

    #[test]
    fn test_pre_is_not_a_paragraph() {
        let content = "<pre>code block</pre><p>real paragraph</p>";
        let signals = PositionalSignals::extract(content);
        assert_eq!(signals.first_paragraph_text(), "real paragraph");
    }

    #[test]
    fn test_plain_text_has_no_signals() {
        let signals = PositionalSignals::extract("Just some text without markup.");
        assert!(signals.heading_text().is_empty());
        assert!(signals.first_paragraph_text().is_empty());
        assert!(!signals.in_heading("text", BonusMatch::Substring));
        assert!(!signals.in_first_paragraph("text", BonusMatch::Substring));
    }

    #[test]
    fn test_substring_match_is_loose() {
        let signals = PositionalSignals::extract("<h1>Party Time</h1>");
        assert!(signals.in_heading("party", BonusMatch::Substring));
        assert!(signals.in_heading("art", BonusMatch::Substring));
    }

    #[test]
    fn test_whole_word_match_respects_boundaries() {
        let signals = PositionalSignals::extract("<h1>Party, Time!</h1><p>Art gallery</p>");
        assert!(signals.in_heading("party", BonusMatch::WholeWord));
        assert!(!signals.in_heading("art", BonusMatch::WholeWord));
        assert!(signals.in_first_paragraph("art", BonusMatch::WholeWord));
    }
}
