//! Rule-based sentence segmentation.
//!
//! A sentence ends at a run of terminal punctuation (plus any closing quotes
//! or brackets) that is followed by whitespace and something that does not
//! look like the middle of a sentence. Full-width CJK terminals end a
//! sentence on their own. Periods after common abbreviations and single
//! capital initials are not boundaries.

/// One sentence of a source text. `text` is a verbatim, trimmed slice of the
/// source and `start` its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
}

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "e.g", "i.e", "cf", "al",
    "fig", "figs", "eq", "vol", "pp", "ed", "eds", "inc", "ltd", "co", "corp", "dept", "est",
    "approx", "gen", "gov", "sen", "rep", "rev", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

fn is_terminal(c: char) -> bool {
    matches!(
        c,
        '.' | '!' | '?' | '…' | '‼' | '⁇' | '⁈' | '⁉' | '。' | '｡' | '！' | '？'
    )
}

fn is_wide_terminal(c: char) -> bool {
    matches!(c, '。' | '｡' | '！' | '？')
}

fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '”' | '’' | '»' | ')' | ']' | '}' | '）' | '」' | '』'
    )
}

/// Splits `text` into sentences in order of appearance.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut segment_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        let mut wide = is_wide_terminal(c);
        let mut end = pos + c.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !is_terminal(next) && !is_closer(next) {
                break;
            }
            wide |= is_wide_terminal(next);
            end = next_pos + next.len_utf8();
            chars.next();
        }

        let rest = &text[end..];
        let boundary = if rest.is_empty() || wide {
            true
        } else if !rest.starts_with(char::is_whitespace) {
            false
        } else {
            starts_sentence(rest) && !(c == '.' && ends_with_abbreviation(&text[segment_start..pos]))
        };

        if boundary {
            push_trimmed(&mut sentences, text, segment_start, end);
            segment_start = end;
        }
    }

    push_trimmed(&mut sentences, text, segment_start, text.len());
    sentences
}

fn starts_sentence(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .next()
        .is_none_or(|c| !c.is_lowercase())
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let mut words = prefix
        .split_whitespace()
        .rev()
        .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()));
    let token = words.next().unwrap_or_default();

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        // "J. R. R. Tolkien", "John F. Kennedy", but not "vitamin C."
        (Some(initial), None) if initial.is_alphabetic() => {
            initial.is_uppercase()
                && words
                    .next()
                    .and_then(|previous| previous.chars().next())
                    .is_none_or(char::is_uppercase)
        }
        _ => ABBREVIATIONS.contains(&token.to_lowercase().as_str()),
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str, start: usize, end: usize) {
    let segment = &text[start..end];
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading = segment.len() - segment.trim_start().len();
    sentences.push(Sentence {
        text: trimmed,
        start: start + leading,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        split_sentences(text).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_terminals() {
        assert_eq!(
            texts("Rust is fast. It is also safe! Is it fun? Yes."),
            vec!["Rust is fast.", "It is also safe!", "Is it fun?", "Yes."]
        );
    }

    #[test]
    fn test_abbreviations_and_decimals() {
        assert_eq!(
            texts("Dr. Smith arrived at 3.30 p.m. yesterday. He left soon after."),
            vec!["Dr. Smith arrived at 3.30 p.m. yesterday.", "He left soon after."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            texts("J. R. R. Tolkien wrote books. They sold well."),
            vec!["J. R. R. Tolkien wrote books.", "They sold well."]
        );
    }

    #[test]
    fn test_capital_after_common_word_ends_sentence() {
        assert_eq!(
            texts(
                "Doctors recommend vitamin C. Oranges contain plenty of it. \
                 The winner was team B. Fans cheered loudly."
            ),
            vec![
                "Doctors recommend vitamin C.",
                "Oranges contain plenty of it.",
                "The winner was team B.",
                "Fans cheered loudly."
            ]
        );
    }

    #[test]
    fn test_middle_initial_does_not_split() {
        assert_eq!(
            texts("John F. Kennedy spoke. By A. Reporter for the paper."),
            vec!["John F. Kennedy spoke.", "By A. Reporter for the paper."]
        );
    }

    #[test]
    fn test_closing_quotes_stay_with_sentence() {
        assert_eq!(
            texts("He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_lowercase_continuation_is_not_a_boundary() {
        assert_eq!(
            texts("Prices rose... and then fell. Markets calmed."),
            vec!["Prices rose... and then fell.", "Markets calmed."]
        );
    }

    #[test]
    fn test_cjk_full_stops() {
        assert_eq!(texts("今日は晴れ。明日は雨。"), vec!["今日は晴れ。", "明日は雨。"]);
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        assert_eq!(
            texts("First sentence. and a trailing fragment"),
            vec!["First sentence. and a trailing fragment"]
        );
        assert_eq!(texts("just a fragment"), vec!["just a fragment"]);
        assert!(texts("   \n ").is_empty());
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  Alpha beta.\n\nGamma delta!  Epsilon?";
        for sentence in split_sentences(text) {
            assert_eq!(&text[sentence.start..sentence.start + sentence.text.len()], sentence.text);
        }
        assert_eq!(split_sentences(text).len(), 3);
    }
}
