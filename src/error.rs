use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extractor::ExtractError;
use crate::summarizer::SummarizeError;

/// Failure kinds exposed to callers of the summarize pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NotAnArticle,
    ExtractionFailed,
    EmptyInput,
    FetchTimeout,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAnArticle => "NotAnArticle",
            Self::ExtractionFailed => "ExtractionFailed",
            Self::EmptyInput => "EmptyInput",
            Self::FetchTimeout => "FetchTimeout",
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error("The request was cancelled before the summary was ready.")]
    Cancelled,

    #[error("Summarization failed unexpectedly: {0}")]
    Task(String),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Extract(ExtractError::NotAnArticle) => ErrorKind::NotAnArticle,
            Self::Extract(ExtractError::Fetch(err)) if err.is_timeout() => ErrorKind::FetchTimeout,
            Self::Extract(_) => ErrorKind::ExtractionFailed,
            Self::Summarize(_) => ErrorKind::EmptyInput,
            Self::Cancelled | Self::Task(_) => ErrorKind::ExtractionFailed,
        }
    }
}
