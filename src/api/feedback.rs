//! Feedback persistence endpoints.
//!
//! Both endpoints require an authenticated user; without one, feedback
//! persistence is unavailable while the budget endpoints stay usable.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::auth;
use crate::store::FeedbackRecord;

use super::routes::{internal_error, AppState};
use super::types::FeedbackRequest;

fn require_user(state: &AppState, headers: &HeaderMap) -> Result<String, (StatusCode, String)> {
    let secret = state.config.jwt_secret.as_deref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "authentication is not configured".to_string(),
    ))?;
    auth::user_from_headers(headers, secret).ok_or((
        StatusCode::UNAUTHORIZED,
        "authentication required".to_string(),
    ))
}

/// Persist a feedback entry for the signed-in user.
pub async fn save(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackRecord>), (StatusCode, String)> {
    let user_id = require_user(&state, &headers)?;
    let criteria = req.criteria.criteria();

    let record = state
        .store
        .insert(&user_id, &criteria, &req.feedback_text, req.rating)
        .map_err(internal_error)?;

    tracing::info!(user_id = %user_id, record_id = %record.id, "feedback saved");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Most recent feedback record for the signed-in user, if any.
pub async fn latest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Option<FeedbackRecord>>, (StatusCode, String)> {
    let user_id = require_user(&state, &headers)?;
    let record = state
        .store
        .latest_for_user(&user_id)
        .map_err(internal_error)?;
    Ok(Json(record))
}
