//! Voice transcription endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::input;
use crate::voice::VoiceError;

use super::routes::AppState;
use super::types::TranscribeResponse;

/// Turn raw audio into a transcript plus a form-ready amount. Capture
/// being unavailable is a notice-level condition, not a server failure:
/// the form remains usable via typed input.
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TranscribeResponse>, (StatusCode, String)> {
    if body.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "empty audio payload".to_string()));
    }

    match state.voice.transcribe(&body).await {
        Ok(transcript) => {
            let amount = input::coerce_amount(&transcript);
            tracing::debug!(transcript = %transcript, amount, "voice input transcribed");
            Ok(Json(TranscribeResponse { transcript, amount }))
        }
        Err(VoiceError::Unsupported) => Err((
            StatusCode::NOT_IMPLEMENTED,
            "voice capture is not available; enter the amount manually".to_string(),
        )),
        Err(e) => {
            tracing::warn!("transcription failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
