//! Text normalization and keyword extraction.
//!
//! Pure and deterministic. Both the trigram builder and the TF-IDF model
//! consume the output of this module.

mod stopwords;

pub use stopwords::is_stop_word;

/// Punctuation stripped from both ends of a token.
const TRIM_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}', '/', '-',
];

/// Tokens with this many characters or fewer are dropped.
const MIN_KEYWORD_CHARS: usize = 2;

/// Zero-width and other invisible format characters (soft hyphen, ZWSP,
/// joiners, bidi marks, BOM).
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{034F}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}

/// Whether `c` separates tokens: whitespace, control or invisible format
/// characters.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_control() || is_invisible(c)
}

/// Lowercase, collapse runs of whitespace and non-printable characters into
/// one space, and trim both ends.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_separator(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Split normalized text into keywords: punctuation-trimmed tokens longer
/// than two characters that are not stop words. Order and duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .map(|token| token.trim_matches(TRIM_CHARS))
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
