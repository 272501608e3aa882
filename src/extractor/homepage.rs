use url::Url;

use crate::extractor::errors::ExtractError;

/// Markers of journal or section index pages.
const INDEX_MARKERS: &[&str] = &["/journal/", "/journals/", "springer.com/journal"];

/// Path fragments of direct article links.
const ARTICLE_MARKERS: &[&str] = &["/article/", "/chapter/"];

/// A table-of-contents view is a listing the reader asked for explicitly.
const TOC_SUFFIX: &str = "?tab=toc";

/// Paths deeper than this are treated as article links.
const MAX_INDEX_SEGMENTS: usize = 3;

/// Looks like a journal or section landing page.
pub fn is_index_url(url: &Url) -> bool {
    let lowered = url.as_str().to_lowercase();
    !lowered.ends_with(TOC_SUFFIX) && INDEX_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Looks like a link to a single article or chapter.
pub fn is_article_url(url: &Url) -> bool {
    let path = url.path().to_lowercase();
    if ARTICLE_MARKERS.iter().any(|m| path.contains(m)) {
        return true;
    }

    let segments = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).count())
        .unwrap_or(0);
    segments > MAX_INDEX_SEGMENTS
}

/// Rejects landing pages before anything is fetched.
pub fn ensure_article(url: &Url) -> Result<(), ExtractError> {
    if is_index_url(url) && !is_article_url(url) {
        return Err(ExtractError::NotAnArticle);
    }
    Ok(())
}
