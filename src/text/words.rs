use regex::Regex;
use std::sync::LazyLock;

/// Letters and digits, with apostrophes allowed between them ("don't",
/// "o'clock"). Punctuation never forms a token.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").unwrap());

/// Word tokens of `text` in order of appearance, as slices of the input.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Lower-cases a token and folds the typographic apostrophe.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().replace('’', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_skip_punctuation() {
        let tokens: Vec<&str> = words("Hello, world! It's 2024 -- café time.").collect();
        assert_eq!(tokens, vec!["Hello", "world", "It's", "2024", "café", "time"]);
    }

    #[test]
    fn test_trailing_apostrophe_is_not_part_of_word() {
        let tokens: Vec<&str> = words("the dogs' bowls").collect();
        assert_eq!(tokens, vec!["the", "dogs", "bowls"]);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Don’t"), "don't");
        assert_eq!(normalize_token("ÉCOLE"), "école");
    }
}
