//! Extractive summarization by term frequency.
//!
//! Content words are counted and range-normalized, every sentence is scored
//! by the sum of its words' scores, and the best sentences are emitted in
//! the order they appear in the source.

pub mod errors;
pub mod frequency;
pub mod ranking;

pub use errors::SummarizeError;
pub use frequency::FrequencyTable;
pub use ranking::{DuplicatePolicy, ScoredSentence};

use tracing::debug;

pub const DEFAULT_SUMMARY_SENTENCES: usize = 7;
/// Upper bound on any summary, whatever limit the caller asks for.
pub const MAX_SUMMARY_SENTENCES: usize = DEFAULT_SUMMARY_SENTENCES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summarizer {
    max_sentences: usize,
    duplicates: DuplicatePolicy,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

impl Summarizer {
    /// Limits above [`MAX_SUMMARY_SENTENCES`] are clamped to it.
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.min(MAX_SUMMARY_SENTENCES),
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// Selected sentences in document order.
    pub fn select<'a>(&self, text: &'a str) -> Result<Vec<ScoredSentence<'a>>, SummarizeError> {
        let table = FrequencyTable::build(text).ok_or(SummarizeError::NoWords)?;

        let mut sentences = ranking::score_sentences(text, &table);
        if self.duplicates == DuplicatePolicy::Collapse {
            sentences = ranking::collapse_duplicates(sentences);
        }
        if sentences.is_empty() {
            return Err(SummarizeError::NoSentences);
        }

        debug!(
            content_words = table.len(),
            sentences = sentences.len(),
            "ranking sentences"
        );
        Ok(ranking::select_top(&sentences, self.max_sentences))
    }

    pub fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let selected = self.select(text)?;
        Ok(selected
            .iter()
            .map(|sentence| sentence.text)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Summarizes `text` to at most seven sentences.
pub fn summarize(text: &str) -> Result<String, SummarizeError> {
    Summarizer::default().summarize(text)
}
