use crate::fetcher::{
    backoff::calculate_backoff_delay,
    decode::{decode_body, detect_encoding},
    errors::FetchError,
    types::{FetchOptions, Page},
};
use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;

static SHARED_FETCHER: Lazy<Fetcher> = Lazy::new(|| {
    Fetcher::new(FetchOptions::default()).expect("Failed to build HTTP client")
});

fn build_client(options: &FetchOptions) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static("en-US,en;q=0.9"),
    );

    ClientBuilder::new()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(options.request_timeout)
        .user_agent(options.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .default_headers(headers)
        .build()
}

/// HTTP page fetcher. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = build_client(&options).map_err(|e| FetchError::Unknown(e.to_string()))?;
        Ok(Self { client, options })
    }

    /// Process-wide fetcher with default options, built on first use.
    pub fn shared() -> &'static Fetcher {
        &SHARED_FETCHER
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url`, retrying transient failures up to
    /// `options.max_retries` times. Cancelling `cancel` aborts both the
    /// in-flight request and any backoff sleep.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<Page, FetchError> {
        let parsed_url = Url::parse(url)?;
        let mut attempt = 0;

        loop {
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                result = self.fetch_once(&parsed_url) => result,
            };

            match result {
                Err(err) if err.should_retry() && attempt < self.options.max_retries => {
                    let delay = calculate_backoff_delay(attempt, self.options.retry_base);
                    warn!(attempt, ?delay, error = %err, "transient fetch failure, retrying");
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Page, FetchError> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let url_final = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        // Content-Length may be absent or wrong, so count as the body streams in
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(FetchError::from_reqwest_error)?
        {
            let total = (body.len() + chunk.len()) as u64;
            if total > MAX_BODY_SIZE {
                return Err(FetchError::BodyTooLarge(total));
            }
            body.extend_from_slice(&chunk);
        }

        let (html, encoding) = decode_body(&body, detect_encoding(&content_type, &body));
        debug!(
            status = %status,
            encoding = encoding.name(),
            bytes = body.len(),
            final_url = %url_final,
            "fetched page"
        );

        Ok(Page {
            url_requested: url.clone(),
            url_final,
            status,
            content_type,
            encoding: encoding.name(),
            html,
            fetched_at: Utc::now(),
        })
    }
}

fn is_html(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml")
}

/// Fetches `url` with the shared fetcher and no cancellation.
pub async fn fetch(url: &str) -> Result<Page, FetchError> {
    Fetcher::shared().fetch(url, &CancellationToken::new()).await
}
