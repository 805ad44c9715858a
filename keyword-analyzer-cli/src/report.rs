use anyhow::Result;
use keyword_analyzer_core::Keyword;
use serde::Serialize;

/// Keywords found for one input
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub keywords: Vec<Keyword>,
}

/// Plain-text listing: one block per input, word and count per line
pub fn format_text(reports: &[Report]) -> String {
    let mut out = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&report.source);
        out.push('\n');

        if report.keywords.is_empty() {
            out.push_str("  (no keywords found)\n");
            continue;
        }

        let width = report
            .keywords
            .iter()
            .map(|k| k.word.chars().count())
            .max()
            .unwrap_or(0);
        for keyword in &report.keywords {
            let pad = width - keyword.word.chars().count();
            out.push_str(&format!(
                "  {}{}  {}\n",
                keyword.word,
                " ".repeat(pad),
                keyword.count
            ));
        }
    }

    out
}

pub fn format_json(reports: &[Report]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Report> {
        vec![
            Report {
                source: "post.html".to_string(),
                keywords: vec![Keyword::new("wordpress", 3), Keyword::new("plugin", 12)],
            },
            Report {
                source: "empty.txt".to_string(),
                keywords: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_format_text_aligns_counts() {
        let text = format_text(&sample());
        assert_eq!(
            text,
            "post.html\n  wordpress  3\n  plugin     12\n\nempty.txt\n  (no keywords found)\n"
        );
    }

    #[test]
    fn test_format_json_has_words_and_counts() -> Result<()> {
        let json = format_json(&sample())?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value[0]["source"], "post.html");
        assert_eq!(value[0]["keywords"][1]["word"], "plugin");
        assert_eq!(value[0]["keywords"][1]["count"], 12);
        assert!(value[1]["keywords"].as_array().map(|a| a.is_empty()).unwrap_or(false));
        Ok(())
    }
}
