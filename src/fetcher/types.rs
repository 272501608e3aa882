use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Desktop browser identity; several publishers serve an error page to
/// obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_MAX_RETRIES: u32 = 1;
pub const DEFAULT_RETRY_BASE: Duration = Duration::from_millis(500);

/// Knobs for a [`Fetcher`](crate::fetcher::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound for the whole request, body download included.
    pub request_timeout: Duration,
    /// Extra attempts after a retriable failure. Zero disables retrying.
    pub max_retries: u32,
    /// First backoff step; doubled on every further attempt.
    pub retry_base: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base: DEFAULT_RETRY_BASE,
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// A fetched HTML page, already decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct Page {
    pub url_requested: Url,
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    /// WHATWG name of the encoding the body was decoded from.
    pub encoding: &'static str,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}
