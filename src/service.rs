//! URL in, summary out.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    error::PipelineError,
    extractor::{self, ExtractionResult, Strategy, language},
    fetcher::{FetchError, Fetcher},
    summarizer::Summarizer,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutcome {
    pub summary: String,
    pub title: String,
    /// Final URL after redirects.
    pub url: Url,
    pub strategy: Strategy,
    pub language: Option<String>,
}

/// Stateless extract-then-summarize pipeline; share one per process.
#[derive(Debug, Clone)]
pub struct SummarizeService {
    fetcher: Fetcher,
    summarizer: Summarizer,
}

impl SummarizeService {
    pub fn new(fetcher: Fetcher, summarizer: Summarizer) -> Self {
        Self {
            fetcher,
            summarizer,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(
            Fetcher::new(config.fetch_options())?,
            Summarizer::new(config.summary_sentences()),
        ))
    }

    #[instrument(skip(self, cancel), fields(url = %url))]
    pub async fn process(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<SummaryOutcome, PipelineError> {
        let ExtractionResult {
            url,
            title,
            text,
            strategy,
            language,
        } = extractor::extract(&self.fetcher, url, cancel).await?;

        if let Some(lang) = language.as_deref()
            && !language::is_english(lang)
        {
            warn!(language = lang, "stop-words are English only; ranking may be weak");
        }

        let summary = self.summarize_text(text, cancel).await?;
        info!(title = %title, summary_chars = summary.len(), "summary ready");

        Ok(SummaryOutcome {
            summary,
            title,
            url,
            strategy,
            language,
        })
    }

    /// Runs the summarizer off the async workers; returns early if `cancel`
    /// fires first.
    pub async fn summarize_text(
        &self,
        text: String,
        cancel: &CancellationToken,
    ) -> Result<String, PipelineError> {
        let summarizer = self.summarizer;
        let task = tokio::task::spawn_blocking(move || summarizer.summarize(&text));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PipelineError::Cancelled),
            joined = task => {
                let summary = joined.map_err(|e| PipelineError::Task(e.to_string()))??;
                Ok(summary)
            }
        }
    }
}
