//! HTTP surface: prompt ingress and command polling
//!
//! ## Endpoints
//!
//! - `POST /translate` — translate a prompt, queue the commands
//! - `GET /next` — poll for the next pending command
//! - `GET /health` — service status and queue depth
//!
//! The canvas plugin polls `/next` on a fixed interval and renders
//! whatever non-sentinel body it receives; CORS is permissive because
//! the plugin loads from a different origin.

pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::server::state::AppState;

/// Build the axum router around a pre-created [`AppState`]
///
/// The caller owns the state and may keep `Arc` clones, e.g. to observe
/// the queue from elsewhere.
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translate", post(routes::translate))
        .route("/next", get(routes::next))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
