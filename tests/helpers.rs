#![allow(dead_code)]

use axum::Router;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use std::sync::Arc;
use uuid::Uuid;

use precis::{
    api,
    app_state::AppState,
    fetcher::{FetchOptions, Fetcher},
    history::MemoryChatStore,
    identity::{JwtIdentityResolver, jwt::Claims},
    service::SummarizeService,
    summarizer::Summarizer,
};

pub const TEST_SECRET: &str = "integration-secret";

pub fn test_state() -> AppState {
    let fetcher = Fetcher::new(FetchOptions {
        max_retries: 0,
        ..FetchOptions::default()
    })
    .unwrap();

    AppState {
        service: Arc::new(SummarizeService::new(fetcher, Summarizer::default())),
        chats: Arc::new(MemoryChatStore::new()),
        identity: Arc::new(JwtIdentityResolver::new(TEST_SECRET)),
    }
}

pub fn test_app() -> Router {
    api::router(test_state())
}

pub fn bearer(user_id: Uuid) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + Duration::hours(1)).timestamp() as usize,
        iat: now.timestamp() as usize,
        email: None,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {token}")
}

pub const ARTICLE_HTML: &str = include_str!("../src/extractor/tests/fixtures/article.html");
pub const EMPTY_HTML: &str = include_str!("../src/extractor/tests/fixtures/empty.html");
