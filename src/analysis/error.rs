//! Error types for the analysis collaborator.

use thiserror::Error;

/// Errors from the text-analysis call. All of them are non-fatal to the
/// request that triggered the analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed analysis response: {0}")]
    Malformed(#[from] serde_json::Error),
}
