use thiserror::Error;

/// Text had nothing to rank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Unable to summarize: no words found for frequency calculation.")]
    NoWords,

    #[error("Unable to summarize: no sentences found for ranking.")]
    NoSentences,
}
