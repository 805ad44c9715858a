use clap::Parser;
use keyword_analyzer_core::DEFAULT_RELATED_COUNT;
use std::path::PathBuf;

/// Find the most powerful keywords in articles and posts
#[derive(Parser, Debug)]
#[command(name = "keyword-analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ranks the keywords of HTML or plain-text content", long_about = None)]
pub struct Args {
    /// Files or directories to analyze (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// JSON settings file (min_word_length, max_keywords, exclude_words, display_method)
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Ignore words shorter than this
    #[arg(short = 'm', long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum number of keywords per input
    #[arg(short = 'k', long = "max-keywords", value_name = "N")]
    pub max_keywords: Option<usize>,

    /// Comma-separated words to exclude (added to the settings list)
    #[arg(short = 'x', long = "exclude", value_name = "LIST")]
    pub exclude: Option<String>,

    /// Only grant heading/paragraph bonuses to whole-word matches
    #[arg(long = "whole-word")]
    pub whole_word: bool,

    /// Rank by raw frequency only, skipping positional scoring
    #[arg(long = "frequency", conflicts_with = "related")]
    pub frequency: bool,

    /// Find words co-occurring with KEYWORD instead of ranking keywords
    #[arg(long = "related", value_name = "KEYWORD")]
    pub related: Option<String>,

    /// Number of related keywords to return
    #[arg(
        long = "count",
        value_name = "N",
        default_value_t = DEFAULT_RELATED_COUNT,
        requires = "related"
    )]
    pub count: usize,

    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Skip hidden files and directories
    #[arg(short = 's', long = "skip-hidden")]
    pub skip_hidden: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["keyword-analyzer", "post.html"]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from("post.html")]);
        assert!(args.settings.is_none());
        assert!(args.min_length.is_none());
        assert!(!args.frequency);
        assert_eq!(args.count, 5);
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "keyword-analyzer",
            "-m",
            "5",
            "-k",
            "3",
            "--exclude",
            "foo,bar",
            "--whole-word",
            "--json",
        ])
        .unwrap();
        assert!(args.paths.is_empty());
        assert_eq!(args.min_length, Some(5));
        assert_eq!(args.max_keywords, Some(3));
        assert_eq!(args.exclude.as_deref(), Some("foo,bar"));
        assert!(args.whole_word);
        assert!(args.json);
    }

    #[test]
    fn test_frequency_conflicts_with_related() {
        let result =
            Args::try_parse_from(["keyword-analyzer", "--frequency", "--related", "solar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_count_requires_related() {
        assert!(Args::try_parse_from(["keyword-analyzer", "--count", "3"]).is_err());
        let args =
            Args::try_parse_from(["keyword-analyzer", "--related", "solar", "--count", "3"])
                .unwrap();
        assert_eq!(args.related.as_deref(), Some("solar"));
        assert_eq!(args.count, 3);
    }
}
