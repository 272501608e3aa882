//! Article extraction and extractive summarization.
//!
//! [`service::SummarizeService`] is the entry point: it fetches a page,
//! isolates the article prose with [`extractor`], and ranks its sentences
//! with [`summarizer`]. [`api`] and the `precis` binary are thin shells
//! around it.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod history;
pub mod identity;
pub mod service;
pub mod summarizer;
pub mod telemetry;
pub mod text;

pub use error::{ErrorKind, PipelineError};
pub use service::{SummarizeService, SummaryOutcome};
