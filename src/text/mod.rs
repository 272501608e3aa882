//! Text helpers shared by extraction and summarization.

pub mod sentences;
pub mod stopwords;
pub mod words;

pub use sentences::{Sentence, split_sentences};
pub use stopwords::is_stop_word;
pub use words::{normalize_token, words};

/// Collapses every run of whitespace (newlines included) to one space and
/// trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for piece in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// True when `haystack` contains any of `needles`, ignoring case.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}
