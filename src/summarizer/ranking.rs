use std::collections::HashMap;

use crate::summarizer::frequency::FrequencyTable;
use crate::text::split_sentences;

/// A sentence occurrence with its position and frequency score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub score: f64,
}

/// How repeated, byte-identical sentences are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Every occurrence is scored and can be selected on its own.
    #[default]
    PerOccurrence,
    /// Identical sentences share one entry at their first position, scored
    /// as the sum over all occurrences. Matches summaries produced by the
    /// earlier text-keyed scoring table.
    Collapse,
}

/// Scores every sentence of `text`, in document order.
pub fn score_sentences<'a>(text: &'a str, table: &FrequencyTable) -> Vec<ScoredSentence<'a>> {
    split_sentences(text)
        .into_iter()
        .map(|sentence| ScoredSentence {
            text: sentence.text,
            start: sentence.start,
            score: table.score_sentence(sentence.text),
        })
        .collect()
}

/// Merges identical sentence texts into their first occurrence.
pub fn collapse_duplicates(sentences: Vec<ScoredSentence<'_>>) -> Vec<ScoredSentence<'_>> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<ScoredSentence<'_>> = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        match first_seen.get(sentence.text) {
            Some(&index) => merged[index].score += sentence.score,
            None => {
                first_seen.insert(sentence.text, merged.len());
                merged.push(sentence);
            }
        }
    }
    merged
}

/// Picks the `limit` highest-scoring sentences and returns them in document
/// order. Equal scores favour the earlier sentence. Zero-score sentences are
/// only eligible when nothing scored above zero.
pub fn select_top<'a>(sentences: &[ScoredSentence<'a>], limit: usize) -> Vec<ScoredSentence<'a>> {
    let mut ranked: Vec<usize> = (0..sentences.len())
        .filter(|&i| sentences[i].score > 0.0)
        .collect();
    if ranked.is_empty() {
        ranked = (0..sentences.len()).collect();
    }

    // stable sort keeps first-seen order among ties
    ranked.sort_by(|&a, &b| sentences[b].score.total_cmp(&sentences[a].score));
    ranked.truncate(limit);
    ranked.sort_unstable();

    ranked.into_iter().map(|i| sentences[i]).collect()
}
