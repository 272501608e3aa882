//! Configuration handling for the service and the command-line tool.
//!
//! Everything is read from environment variables with development defaults,
//! so `Config::from_env` works on a bare machine. Numeric values are
//! validated; a malformed value is an error rather than a silent default.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::fetcher::FetchOptions;
use crate::summarizer::{DEFAULT_SUMMARY_SENTENCES, MAX_SUMMARY_SENTENCES};
use crate::telemetry::LogFormat;

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "PRECIS_FETCH_TIMEOUT_SECS";
pub const ENV_FETCH_RETRIES: &str = "PRECIS_FETCH_RETRIES";
pub const ENV_SUMMARY_SENTENCES: &str = "PRECIS_SUMMARY_SENTENCES";
pub const ENV_LOG_FORMAT: &str = "PRECIS_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
const DEFAULT_FETCH_RETRIES: u32 = 1;

/// Fetches longer than this are refused at configuration time.
const MAX_FETCH_TIMEOUT_SECS: u64 = 120;
const MAX_FETCH_RETRIES: u32 = 5;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    jwt_secret: String,
    fetch_timeout: Duration,
    fetch_retries: u32,
    summary_sentences: usize,
    log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            fetch_retries: DEFAULT_FETCH_RETRIES,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr);
        let jwt_secret = env::var(ENV_JWT_SECRET).unwrap_or(defaults.jwt_secret);
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: ENV_JWT_SECRET,
                reason: "must not be empty".to_string(),
            });
        }

        let timeout_secs = parse_env(ENV_FETCH_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS)?;
        let fetch_timeout = check_fetch_timeout(ENV_FETCH_TIMEOUT_SECS, timeout_secs)?;

        let fetch_retries = parse_env(ENV_FETCH_RETRIES, DEFAULT_FETCH_RETRIES)?;
        let fetch_retries = check_fetch_retries(ENV_FETCH_RETRIES, fetch_retries)?;

        let summary_sentences = parse_env(ENV_SUMMARY_SENTENCES, DEFAULT_SUMMARY_SENTENCES)?;
        let summary_sentences = check_summary_sentences(ENV_SUMMARY_SENTENCES, summary_sentences)?;

        let log_format = parse_env(ENV_LOG_FORMAT, LogFormat::Text)?;

        Ok(Self {
            bind_addr,
            jwt_secret,
            fetch_timeout,
            fetch_retries,
            summary_sentences,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Secret used to verify bearer tokens.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    pub fn fetch_retries(&self) -> u32 {
        self.fetch_retries
    }
    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Overrides the fetch timeout. `field` names the source of the value in
    /// the error, e.g. a command-line flag.
    pub fn with_fetch_timeout(
        mut self,
        field: &'static str,
        secs: u64,
    ) -> Result<Self, ConfigError> {
        self.fetch_timeout = check_fetch_timeout(field, secs)?;
        Ok(self)
    }
    pub fn with_fetch_retries(
        mut self,
        field: &'static str,
        retries: u32,
    ) -> Result<Self, ConfigError> {
        self.fetch_retries = check_fetch_retries(field, retries)?;
        Ok(self)
    }
    pub fn with_summary_sentences(
        mut self,
        field: &'static str,
        sentences: usize,
    ) -> Result<Self, ConfigError> {
        self.summary_sentences = check_summary_sentences(field, sentences)?;
        Ok(self)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            request_timeout: self.fetch_timeout,
            max_retries: self.fetch_retries,
            ..FetchOptions::default()
        }
    }
}

fn check_fetch_timeout(field: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 || secs > MAX_FETCH_TIMEOUT_SECS {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be between 1 and {MAX_FETCH_TIMEOUT_SECS}"),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn check_fetch_retries(field: &'static str, retries: u32) -> Result<u32, ConfigError> {
    if retries > MAX_FETCH_RETRIES {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be at most {MAX_FETCH_RETRIES}"),
        });
    }
    Ok(retries)
}

fn check_summary_sentences(field: &'static str, sentences: usize) -> Result<usize, ConfigError> {
    if sentences == 0 || sentences > MAX_SUMMARY_SENTENCES {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be between 1 and {MAX_SUMMARY_SENTENCES}"),
        });
    }
    Ok(sentences)
}

fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
