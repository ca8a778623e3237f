//! Router assembly and server startup.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analysis::FeedbackAdjuster;
use crate::config::Config;
use crate::store::FeedbackStore;
use crate::voice::VoiceCapture;

/// Shared state for all handlers.
pub struct AppState {
    pub config: Config,
    pub store: FeedbackStore,
    /// Absent when no analysis endpoint is configured.
    pub adjuster: Option<Arc<FeedbackAdjuster>>,
    pub voice: Arc<dyn VoiceCapture>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/budget", post(super::budget::compute))
        .route("/api/budget/adjusted", post(super::budget::compute_adjusted))
        .route("/api/content", get(super::budget::content))
        .route("/api/feedback", post(super::feedback::save))
        .route("/api/feedback/latest", get(super::feedback::latest))
        .route("/api/voice/transcribe", post(super::voice::transcribe))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Map an internal failure to a 500 without leaking stack detail.
pub(super) fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!("internal error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Bind and serve until shutdown.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
