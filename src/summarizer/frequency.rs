use std::collections::HashMap;

use crate::text::{is_stop_word, normalize_token, words};

/// Normalized term frequencies of the content words of one text.
///
/// Scores are `count / max_count`, so the most frequent content word scores
/// exactly 1.0. Stop-words never appear in the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Returns `None` when no content word survives stop-word filtering.
    pub fn build(text: &str) -> Option<Self> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in words(text) {
            let token = normalize_token(token);
            if !is_stop_word(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let max_count = counts.values().copied().max()?;
        let scores = counts
            .into_iter()
            .map(|(token, count)| (token, f64::from(count) / f64::from(max_count)))
            .collect();

        Some(Self { scores })
    }

    /// Score of an already-normalized token; 0.0 for stop-words and unknown
    /// tokens.
    pub fn score(&self, token: &str) -> f64 {
        self.scores.get(token).copied().unwrap_or(0.0)
    }

    /// Sum of the scores of every word token in `sentence`.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        words(sentence)
            .map(|token| self.score(&normalize_token(token)))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(token, score)| (token.as_str(), *score))
    }
}
