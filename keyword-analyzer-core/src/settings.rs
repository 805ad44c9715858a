use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::options::{
    AnalysisOptions, BonusMatch, DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_WORD_LENGTH,
};
use crate::stop_words::parse_exclude_words;

/// Exclusion list stored when settings are first created
pub const DEFAULT_EXCLUDE_WORDS: &str =
    "the,and,that,for,this,with,from,your,have,are,not,will,more,what,about";

/// Where the keyword list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMethod {
    /// Appended after every rendered post or page
    #[default]
    AfterContent,
    /// Only where an explicit directive asks for it
    Shortcode,
}

impl DisplayMethod {
    /// True if analysis should run on every content render
    pub fn auto_appends(&self) -> bool {
        matches!(self, DisplayMethod::AfterContent)
    }
}

/// The persisted settings record, as a settings store hands it over
///
/// Numbers are signed because stores happily return zero or negative values;
/// [`KeywordSettings::to_options`] replaces those with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSettings {
    pub min_word_length: i64,
    pub max_keywords: i64,
    /// Comma-separated, case-insensitive
    pub exclude_words: String,
    pub display_method: DisplayMethod,
    pub bonus_match: BonusMatch,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH as i64,
            max_keywords: DEFAULT_MAX_KEYWORDS as i64,
            exclude_words: DEFAULT_EXCLUDE_WORDS.to_string(),
            display_method: DisplayMethod::AfterContent,
            bonus_match: BonusMatch::Substring,
        }
    }
}

impl KeywordSettings {
    /// Load settings from a JSON file, or defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let settings = serde_json::from_str(data).context("Failed to parse settings JSON")?;
        Ok(settings)
    }

    /// Resolves the record into analysis options, substituting defaults for
    /// non-positive numbers
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_word_length: positive_or_default(
                "min_word_length",
                self.min_word_length,
                DEFAULT_MIN_WORD_LENGTH,
            ),
            max_keywords: positive_or_default(
                "max_keywords",
                self.max_keywords,
                DEFAULT_MAX_KEYWORDS,
            ),
            exclude_words: parse_exclude_words(&self.exclude_words),
            bonus_match: self.bonus_match,
        }
    }
}

fn positive_or_default(name: &str, value: i64, default: usize) -> usize {
    if value > 0 {
        usize::try_from(value).unwrap_or(default)
    } else {
        warn!("Setting {} = {} is not positive, using {}", name, value, default);
        default
    }
}
