//! Axum route handlers for the HTTP API

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::core::error::BridgeError;
use crate::server::models::{ErrorResponse, HealthResponse, TranslateRequest, TranslateResponse};
use crate::server::state::AppState;

/// `GET /health` — service status and queue depth
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        pending: state.queue.len(),
    })
}

/// `POST /translate` — translate a prompt and queue the resulting commands
///
/// An empty or missing prompt is the only hard error (400); translation
/// failure inside the strategy degrades to a fallback batch and still
/// answers 200. Each command is enqueued individually, so batches from
/// concurrent requests may interleave in the queue.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(BridgeError::MissingPrompt.to_string())),
        ));
    }

    tracing::info!(prompt = %request.prompt, "received prompt");
    let commands = state.translator.translate(&request.prompt).await;

    let queued_count = commands.len();
    for command in commands {
        state.queue.enqueue(command);
    }
    tracing::debug!(queued_count, pending = state.queue.len(), "commands queued");

    Ok(Json(TranslateResponse {
        status: "ok".to_string(),
        queued_count,
    }))
}

/// `GET /next` — poll for the next pending command
///
/// Returns the dequeued command as a flat JSON object (no envelope), or
/// `{"status": "no-command"}` when the queue is empty. Never waits; the
/// consumer owns its retry cadence.
pub async fn next(State(state): State<Arc<AppState>>) -> Response {
    match state.queue.dequeue_or_empty() {
        Some(command) => match serde_json::to_value(&command) {
            Ok(value) => Json(value).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response(),
        },
        None => Json(serde_json::json!({"status": "no-command"})).into_response(),
    }
}
