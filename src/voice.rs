//! Voice capture capability.
//!
//! A pluggable, single-method interface so alternate speech providers can
//! be substituted without touching the allocator. The default provider
//! reports voice capture as unavailable; the form stays usable via typed
//! input either way.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice capture is not available")]
    Unsupported,

    #[error("transcription request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transcription service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed transcription response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Trait for speech-to-text providers.
#[async_trait]
pub trait VoiceCapture: Send + Sync {
    /// Turn raw audio into a transcript.
    async fn transcribe(&self, audio: &[u8]) -> Result<String, VoiceError>;
}

/// Provider used when no transcription endpoint is configured.
pub struct UnsupportedVoice;

#[async_trait]
impl VoiceCapture for UnsupportedVoice {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, VoiceError> {
        Err(VoiceError::Unsupported)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptBody {
    text: String,
}

/// Posts raw audio to a managed transcription endpoint and expects a
/// `{"text": "..."}` response.
pub struct HttpTranscriber {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl VoiceCapture for HttpTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, VoiceError> {
        let mut req = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio.to_vec());
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Status { status, body });
        }

        let body: TranscriptBody = serde_json::from_str(&response.text().await?)?;
        tracing::debug!(transcript_len = body.text.len(), "transcript received");
        Ok(body.text)
    }
}
