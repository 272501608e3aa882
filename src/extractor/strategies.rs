//! Body-text extraction heuristics, tried in order until one yields prose.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::document::{element_text, join_texts};
use crate::extractor::model::Strategy;
use crate::text::{collapse_whitespace, contains_any};

/// Likely article containers, most specific first.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    "main",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".content",
    "#content",
    ".article-body",
    ".post-body",
];

const BOILERPLATE: &[&str] = &[
    "copyright",
    "privacy policy",
    "terms of service",
    "sign up",
    "login",
    "subscribe",
];

const BODY_BOILERPLATE: &[&str] = &[
    "copyright",
    "privacy policy",
    "terms of service",
    "sign up",
    "login",
    "subscribe",
    "cookies",
    "accept cookies",
    "cookie settings",
    "follow us",
    "contact us",
];

const MIN_ELEMENT_CHARS: usize = 20;
const MIN_CHUNK_CHARS: usize = 30;
const MAX_BODY_CHUNKS: usize = 20;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

pub type StrategyFn = fn(&Html) -> Option<String>;

/// The extraction cascade, in the order it is tried.
pub const CASCADE: [(Strategy, StrategyFn); 4] = [
    (Strategy::ContentContainer, content_container),
    (Strategy::AllParagraphs, all_paragraphs),
    (Strategy::FilteredElements, filtered_elements),
    (Strategy::BodyChunks, body_chunks),
];

/// First non-blank result of [`CASCADE`].
pub fn run_cascade(document: &Html) -> Option<(Strategy, String)> {
    CASCADE.iter().find_map(|(strategy, run)| {
        run(document)
            .filter(|text| !text.trim().is_empty())
            .map(|text| (*strategy, text))
    })
}

/// Paragraphs of the first matching content container. A container without
/// paragraph text hands over to the next selector.
pub fn content_container(document: &Html) -> Option<String> {
    let paragraph = Selector::parse("p").ok()?;

    CONTENT_SELECTORS
        .iter()
        .filter_map(|selector| Selector::parse(selector).ok())
        .filter_map(|selector| document.select(&selector).next())
        .map(|container| join_texts(container.select(&paragraph)))
        .find(|text| !text.is_empty())
}

/// Every paragraph of the document.
pub fn all_paragraphs(document: &Html) -> Option<String> {
    let paragraph = Selector::parse("p").ok()?;
    Some(join_texts(document.select(&paragraph)))
}

/// Text-bearing elements that are long enough and free of boilerplate
/// phrases. Nested matches repeat their text.
pub fn filtered_elements(document: &Html) -> Option<String> {
    let selector = Selector::parse("p, div, span, li").ok()?;

    let kept: Vec<String> = document
        .select(&selector)
        .map(|element| collapse_whitespace(&element_text(element)))
        .filter(|text| text.chars().count() > MIN_ELEMENT_CHARS && !contains_any(text, BOILERPLATE))
        .collect();

    Some(kept.join(" "))
}

/// Blank-line separated chunks of the whole body, capped at
/// [`MAX_BODY_CHUNKS`].
pub fn body_chunks(document: &Html) -> Option<String> {
    let body = Selector::parse("body").ok()?;
    let body = document.select(&body).next()?;
    let raw = element_text(body);

    let kept: Vec<String> = BLANK_LINE
        .split(&raw)
        .map(collapse_whitespace)
        .filter(|chunk| {
            chunk.chars().count() > MIN_CHUNK_CHARS && !contains_any(chunk, BODY_BOILERPLATE)
        })
        .take(MAX_BODY_CHUNKS)
        .collect();

    Some(kept.join(" "))
}
