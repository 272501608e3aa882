use std::fs;
use url::Url;

use crate::extractor::{ExtractError, Strategy, extract_from_html};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn test_extract_article() {
    let html = fixture("article.html");
    let content = extract_from_html(&url("https://example.com/news/budget"), &html).unwrap();

    assert_eq!(content.title, "Sample Article - News Site");
    assert_eq!(content.strategy, Strategy::ContentContainer);
    assert!(content.text.contains("first paragraph"));
    assert!(content.text.contains("second paragraph"));
    assert!(content.text.contains("new parks, new libraries"));
    assert!(!content.text.contains("Copyright"));
    assert!(!content.text.contains("Sign up"));
    assert!(!content.text.contains("analytics"));
    assert_eq!(content.language.as_deref(), Some("eng"));
}

#[test]
fn test_extract_blog_post() {
    let html = fixture("blog.html");
    let content = extract_from_html(&url("https://blog.example.com/post"), &html).unwrap();

    assert_eq!(content.title, "How to Build Better Software | Tech Blog");
    assert_eq!(content.strategy, Strategy::ContentContainer);
    assert!(content.text.starts_with("Building better software"));
    // headings are not paragraphs
    assert!(!content.text.contains("Key Principles"));
    assert!(!content.text.contains("Follow us"));
}

#[test]
fn test_extract_listing_uses_filtered_elements() {
    let html = fixture("listing.html");
    let content =
        extract_from_html(&url("https://example.com/archive/volumes"), &html).unwrap();

    assert_eq!(content.strategy, Strategy::FilteredElements);
    assert_eq!(
        content.text,
        "Volume 42, Issue 3 (March 2024) of the journal Volume 42, Issue 2 (February 2024) of the journal"
    );
}

#[test]
fn test_reject_script_only_page() {
    let html = fixture("empty.html");
    let result = extract_from_html(&url("https://example.com/app"), &html);

    assert!(matches!(result, Err(ExtractError::NoContent)));
}

#[test]
fn test_journal_homepage_is_rejected_before_parsing() {
    let html = fixture("article.html");
    let result = extract_from_html(&url("https://example.com/journal/42"), &html);
    assert!(matches!(result, Err(ExtractError::NotAnArticle)));

    let content = extract_from_html(&url("https://example.com/journal/42/article/7"), &html);
    assert!(content.is_ok());
}

#[test]
fn test_missing_title_defaults_to_untitled() {
    let html = "<html><body><article><p>Body text only.</p></article></body></html>";
    let content = extract_from_html(&url("https://example.com/a"), html).unwrap();
    assert_eq!(content.title, "Untitled");
    assert_eq!(content.text, "Body text only.");
    assert_eq!(content.language, None);
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let content = extract_from_html(&url("https://example.com/broken"), html).unwrap();

    assert_eq!(content.title, "Broken");
    assert!(content.text.contains("Unclosed tags"));
}

#[test]
fn test_error_messages_guide_the_user() {
    assert!(
        ExtractError::NotAnArticle
            .to_string()
            .contains("Please provide a direct link to an article")
    );
    assert!(
        ExtractError::NoContent
            .to_string()
            .starts_with("Unable to extract article content.")
    );
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            path in "/[a-z/]{0,30}"
        ) {
            let url = url(&format!("https://example.com{path}"));
            let _ = extract_from_html(&url, &html);
        }

        #[test]
        fn test_extracted_text_is_never_blank(
            paragraphs in proptest::collection::vec("[a-zA-Z ]{0,40}", 0..8),
        ) {
            let body: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
            let html = format!("<html><body>{body}</body></html>");
            if let Ok(content) = extract_from_html(&url("https://example.com/a"), &html) {
                prop_assert!(!content.text.trim().is_empty());
            }
        }
    }
}
