use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII word characters only; anything else separates tokens.
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z0-9_]+").expect("valid regex");
}

/// Tokenize document text into lowercase runs of word characters, in source order.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Tokenize a query on whitespace. Punctuation stays attached to its token,
/// so `"go,"` will not resolve to the term `go`.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(|t| t.to_lowercase()).collect()
}
