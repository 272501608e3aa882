pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{app_state::AppState, health::health_check};

/// Public HTTP surface. Every request gets an `x-request-id` that is echoed
/// back on the response.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/v1/summarize", post(handlers::summarize))
        .route("/v1/history", get(handlers::list_history))
        .route(
            "/v1/chats/{chat_id}",
            get(handlers::get_chat)
                .put(handlers::rename_chat)
                .delete(handlers::delete_chat),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
