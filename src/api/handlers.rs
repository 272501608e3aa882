use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    api::dtos::{
        ChatResponse, ErrorResponse, HistoryResponse, RenameChatRequest, RenameChatResponse,
        SummarizeRequest, SummarizeResponse,
    },
    app_state::AppState,
    error::{ErrorKind, PipelineError},
    history::ChatMessage,
    identity::AuthenticatedUser,
};

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotAnArticle | ErrorKind::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::ExtractionFailed => StatusCode::BAD_GATEWAY,
        ErrorKind::FetchTimeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn pipeline_error_response(err: PipelineError) -> Response {
    let kind = err.kind();
    let status = status_for(kind);
    if status.is_server_error() {
        warn!(error = %err, kind = kind.as_str(), "summarize failed");
    } else {
        info!(error = %err, kind = kind.as_str(), "summarize rejected");
    }
    (
        status,
        Json(ErrorResponse::with_kind(err.to_string(), kind)),
    )
        .into_response()
}

pub async fn summarize(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response();
    }

    let url = payload.url.trim().to_string();
    let chat_id = payload
        .chat_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // A client disconnect drops this future, and with it the guard.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let outcome = match state.service.process(&url, &cancel).await {
        Ok(outcome) => outcome,
        Err(err) => return pipeline_error_response(err),
    };

    let messages = vec![
        ChatMessage::user(url.as_str()),
        ChatMessage::assistant(outcome.summary.as_str(), url.as_str()),
    ];
    if let Err(err) = state
        .chats
        .upsert_chat(identity.user_id, &chat_id, &outcome.title, messages)
        .await
    {
        error!(error = %err, %chat_id, "failed to record chat history");
    }

    (
        StatusCode::OK,
        Json(SummarizeResponse {
            summary: outcome.summary,
            title: outcome.title,
            chat_id,
        }),
    )
        .into_response()
}

pub async fn get_chat(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(chat_id): Path<String>,
) -> Response {
    match state
        .chats
        .find_chat_by_external_id(identity.user_id, &chat_id)
        .await
    {
        Ok(Some(chat)) => (StatusCode::OK, Json(ChatResponse::from(chat))).into_response(),
        Ok(None) => chat_not_found(),
        Err(err) => {
            error!(error = %err, %chat_id, "failed to load chat history");
            history_unavailable()
        }
    }
}

pub async fn list_history(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Response {
    match state.chats.list_chats(identity.user_id).await {
        Ok(chats) => (
            StatusCode::OK,
            Json(HistoryResponse {
                chats: chats.into_iter().map(ChatResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to list chat history");
            history_unavailable()
        }
    }
}

pub async fn rename_chat(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(chat_id): Path<String>,
    payload: Result<Json<RenameChatRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response();
    }

    let title = payload.title.trim().to_string();
    match state
        .chats
        .rename_chat(identity.user_id, &chat_id, &title)
        .await
    {
        Ok(true) => (StatusCode::OK, Json(RenameChatResponse { chat_id, title })).into_response(),
        Ok(false) => chat_not_found(),
        Err(err) => {
            error!(error = %err, %chat_id, "failed to rename chat");
            history_unavailable()
        }
    }
}

pub async fn delete_chat(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(chat_id): Path<String>,
) -> Response {
    match state.chats.delete_chat(identity.user_id, &chat_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => chat_not_found(),
        Err(err) => {
            error!(error = %err, %chat_id, "failed to delete chat");
            history_unavailable()
        }
    }
}

fn chat_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Chat not found")),
    )
        .into_response()
}

fn history_unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Chat history unavailable")),
    )
        .into_response()
}
