use std::time::Duration;

use precis::{
    ErrorKind, SummarizeService,
    extractor::{self, ExtractError, Strategy},
    fetcher::{FetchOptions, Fetcher},
    summarizer::Summarizer,
};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const BLOG_HTML: &str = include_str!("../src/extractor/tests/fixtures/blog.html");
const LISTING_HTML: &str = include_str!("../src/extractor/tests/fixtures/listing.html");

fn fetcher() -> Fetcher {
    Fetcher::new(FetchOptions {
        max_retries: 0,
        ..FetchOptions::default()
    })
    .unwrap()
}

async fn serve(server: &MockServer, at: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html.to_string(), "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extract_follows_redirects_and_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/p/123"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/blog/2024/better-software"),
        )
        .mount(&server)
        .await;
    serve(&server, "/blog/2024/better-software", BLOG_HTML).await;

    let url = format!("{}/p/123", server.uri());
    let result = extractor::extract(&fetcher(), &url, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.title, "How to Build Better Software | Tech Blog");
    assert_eq!(result.strategy, Strategy::ContentContainer);
    assert!(result.url.path().ends_with("/blog/2024/better-software"));
    assert!(!result.text.contains("Follow us"));
}

#[tokio::test]
async fn test_extract_listing_falls_through_to_filtered_elements() {
    let server = MockServer::start().await;
    serve(&server, "/archive/volumes", LISTING_HTML).await;

    let url = format!("{}/archive/volumes", server.uri());
    let result = extractor::extract(&fetcher(), &url, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.strategy, Strategy::FilteredElements);
}

#[tokio::test]
async fn test_toc_view_of_journal_is_fetched() {
    let server = MockServer::start().await;
    serve(&server, "/journal/42", BLOG_HTML).await;

    let url = format!("{}/journal/42?tab=toc", server.uri());
    let result = extractor::extract(&fetcher(), &url, &CancellationToken::new()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_journal_homepage_is_rejected() {
    let result = extractor::extract(
        &fetcher(),
        "https://link.springer.com/journal/11192",
        &CancellationToken::new(),
    )
    .await;
    assert!(matches!(result, Err(ExtractError::NotAnArticle)));
}

#[tokio::test]
async fn test_service_summary_is_bounded_and_ordered() {
    let paragraphs: String = (1..=12)
        .map(|i| {
            format!(
                "<p>Paragraph {i} talks about rivers and rain. Rivers carry rain water {i} miles to the sea.</p>"
            )
        })
        .collect();
    let html = format!(
        "<html><head><title>Rivers</title></head><body><article>{paragraphs}</article></body></html>"
    );

    let server = MockServer::start().await;
    serve(&server, "/science/water/rivers", &html).await;

    let service = SummarizeService::new(fetcher(), Summarizer::new(3));
    let url = format!("{}/science/water/rivers", server.uri());
    let outcome = service
        .process(&url, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.title, "Rivers");
    let sentences: Vec<&str> = outcome.summary.split_inclusive(". ").collect();
    assert!(sentences.len() <= 3);

    let text_positions: Vec<usize> = sentences
        .iter()
        .map(|s| html.find(s.trim()).unwrap())
        .collect();
    assert!(text_positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_service_cancellation_skips_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/2024/05/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(BLOG_HTML, "text/html")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let service = SummarizeService::new(fetcher(), Summarizer::default());
    let url = format!("{}/news/2024/05/slow", server.uri());
    let err = service.process(&url, &cancel).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExtractionFailed);
}
