use anyhow::Result;
use keyword_analyzer_core::{
    parse_exclude_words, AnalysisOptions, BonusMatch, KeywordAnalyzer, KeywordSettings,
};

mod cli;
mod input;
mod report;

use report::Report;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let settings = match &args.settings {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            KeywordSettings::load(path)?
        }
        None => KeywordSettings::default(),
    };
    log::debug!("Display method: {:?}", settings.display_method);

    let analyzer = KeywordAnalyzer::new(resolve_options(&settings, &args));
    log::debug!("Analysis options: {:?}", analyzer.options());

    let documents = input::collect_documents(&args.paths, args.skip_hidden)?;
    if documents.is_empty() {
        anyhow::bail!("No content files found. Use --help for usage information.");
    }
    log::info!("Analyzing {} input(s)", documents.len());

    let reports: Vec<Report> = if let Some(keyword) = &args.related {
        documents
            .into_iter()
            .map(|doc| Report {
                keywords: analyzer.related_keywords(&doc.content, keyword, args.count),
                source: doc.source,
            })
            .collect()
    } else if args.frequency {
        documents
            .into_iter()
            .map(|doc| Report {
                keywords: analyzer.top_keywords_by_frequency(&doc.content),
                source: doc.source,
            })
            .collect()
    } else {
        let contents: Vec<&str> = documents.iter().map(|doc| doc.content.as_str()).collect();
        let results = analyzer.analyze_batch(&contents);
        documents
            .into_iter()
            .zip(results)
            .map(|(doc, keywords)| Report {
                source: doc.source,
                keywords,
            })
            .collect()
    };

    if args.json {
        println!("{}", report::format_json(&reports)?);
    } else {
        print!("{}", report::format_text(&reports));
    }

    Ok(())
}

/// Settings first, then command-line overrides
fn resolve_options(settings: &KeywordSettings, args: &cli::Args) -> AnalysisOptions {
    let mut options = settings.to_options();

    if let Some(min_length) = args.min_length {
        options.min_word_length = min_length;
    }
    if let Some(max_keywords) = args.max_keywords {
        options.max_keywords = max_keywords;
    }
    if let Some(exclude) = &args.exclude {
        options.exclude_words.extend(parse_exclude_words(exclude));
    }
    if args.whole_word {
        options.bonus_match = BonusMatch::WholeWord;
    }

    options
}
