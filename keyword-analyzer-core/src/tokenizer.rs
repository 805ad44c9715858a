use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^\s>][^>]*>").unwrap();
    static ref ENTITY_RE: Regex = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap();
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\p{L}\p{N}\s]").unwrap();
}

/// Removes markup tags and decodes common HTML entities
///
/// Tags are dropped without inserting whitespace, so text on either side of a
/// tag is joined. A `<` followed by whitespace never opens a tag, so
/// comparisons in prose survive, as does an unmatched `<`.
pub fn strip_markup(content: &str) -> String {
    let no_tags = TAG_RE.replace_all(content, "");
    decode_entities(&no_tags)
}

/// Decodes the handful of entities that show up in post content
fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            match entity {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                _ => decode_numeric_entity(entity).unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}

fn decode_numeric_entity(entity: &str) -> Option<String> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(|c| c.to_string())
}

/// Strips markup, lowercases and removes everything that is not a letter,
/// digit or whitespace. Non-Latin scripts survive untouched.
pub fn normalize(content: &str) -> String {
    let lower = strip_markup(content).to_lowercase();
    NON_WORD_RE.replace_all(&lower, "").into_owned()
}

/// Splits content into normalized word tokens
pub fn tokenize(content: &str) -> Vec<String> {
    normalize(content)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
