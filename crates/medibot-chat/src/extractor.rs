//! Search-term extraction for data search queries.

use std::sync::LazyLock;

use regex::Regex;

/// Term used when nothing meaningful is left after stripping.
pub const DEFAULT_SEARCH_TERM: &str = "symptoms";

/// Maximum number of tokens kept in a search term.
const MAX_TERMS: usize = 2;

/// Tokens this short or shorter are dropped.
const MIN_TOKEN_CHARS: usize = 2;

// Longer phrases come first so "search for" is removed whole.
static STOP_PHRASES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:search\s+for|look\s+for|search|find|about|tweets)\b")
        .expect("Invalid stop-phrase regex")
});

/// Reduce a search request to a short search term.
///
/// Strips the stop-phrases, lowercases, drops tokens of two characters or
/// fewer, and keeps at most the first two tokens. Returns
/// [`DEFAULT_SEARCH_TERM`] when nothing is left.
pub fn extract_term(message: &str) -> String {
    let stripped = STOP_PHRASES_RE.replace_all(message, " ").to_lowercase();
    let term = stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS)
        .take(MAX_TERMS)
        .collect::<Vec<_>>()
        .join(" ");

    if term.is_empty() {
        DEFAULT_SEARCH_TERM.to_string()
    } else {
        term
    }
}
