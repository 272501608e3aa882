pub mod document;
pub mod errors;
pub mod homepage;
pub mod language;
pub mod model;
pub mod strategies;

#[cfg(test)]
mod tests;

pub use errors::ExtractError;
pub use model::{ExtractionResult, Strategy};

use scraper::Html;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use url::Url;

use crate::fetcher::Fetcher;

/// Fetches `url` and extracts its article text and title.
///
/// Landing-page URLs are rejected before any request is made.
#[instrument(skip_all, fields(url = %url))]
pub async fn extract(
    fetcher: &Fetcher,
    url: &str,
    cancel: &CancellationToken,
) -> Result<ExtractionResult, ExtractError> {
    let requested = Url::parse(url)?;
    homepage::ensure_article(&requested)?;

    let page = fetcher.fetch(url, cancel).await?;

    let mut result = extract_from_html(&requested, &page.html)?;
    result.url = page.url_final;
    Ok(result)
}

/// Extraction over already-fetched HTML.
pub fn extract_from_html(url: &Url, html: &str) -> Result<ExtractionResult, ExtractError> {
    homepage::ensure_article(url)?;

    let document = Html::parse_document(html);
    let title = document::title(&document);

    let Some((strategy, text)) = strategies::run_cascade(&document) else {
        debug!("every extraction strategy came back empty");
        return Err(ExtractError::NoContent);
    };

    let language = language::detect_language(&text);
    info!(
        strategy = strategy.as_str(),
        chars = text.len(),
        language = language.as_deref().unwrap_or("unknown"),
        "extracted article text"
    );

    Ok(ExtractionResult {
        url: url.clone(),
        title,
        text,
        strategy,
        language,
    })
}
