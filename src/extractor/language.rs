use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Best-effort ISO 639-3 code for the language of `text`. Short or
/// ambiguous text yields `None`.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return None;
    }

    detect(text)
        .filter(|info| info.confidence() >= MIN_CONFIDENCE)
        .map(|info| info.lang().code().to_string())
}

/// The stop-word list only covers English.
pub fn is_english(code: &str) -> bool {
    code == Lang::Eng.code()
}
