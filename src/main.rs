use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use precis::{
    SummarizeService, api::dtos::ErrorResponse, config::Config, telemetry::init_tracing,
};
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "precis")]
#[command(about = "Summarize a web article to its most representative sentences", long_about = None)]
struct Cli {
    /// Direct link to the article.
    url: String,

    /// Maximum number of sentences in the summary (1 to 7).
    #[arg(long, short = 's')]
    sentences: Option<usize>,

    /// Print a JSON object instead of plain text.
    #[arg(long)]
    json: bool,

    /// Request timeout for the page fetch, in seconds (1 to 120).
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format());

    if let Some(sentences) = cli.sentences {
        config = config.with_summary_sentences("--sentences", sentences)?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_fetch_timeout("--timeout", secs)?;
    }

    let service = SummarizeService::from_config(&config).context("Failed to build HTTP client")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, abandoning request");
            on_interrupt.cancel();
        }
    });

    match service.process(cli.url.trim(), &cancel).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}\n\n{}", outcome.title, outcome.summary);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if cli.json {
                let body = ErrorResponse::with_kind(err.to_string(), err.kind());
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                eprintln!("{}: {}", err.kind().as_str(), err);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
