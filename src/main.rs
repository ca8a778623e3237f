//! campus-budget - budget planning service for college students.
//!
//! Collects monthly income and expense estimates, computes a fixed-ratio
//! budget breakdown, and optionally refines it with feedback analyzed by a
//! remote text-analysis collaborator. Voice capture, authentication and
//! analysis are all pluggable; the allocator works without any of them.

mod analysis;
mod api;
mod auth;
mod budget;
mod config;
mod content;
mod input;
mod store;
mod voice;

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::voice::VoiceCapture;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_budget=info,tower_http=info")),
        )
        .init();

    let config_path = std::env::var("CAMPUS_BUDGET_CONFIG")
        .ok()
        .map(PathBuf::from);
    let config = config::Config::load(config_path.as_deref())?;

    let store = store::FeedbackStore::open(&config.database_path)?;

    let adjuster = match &config.analysis {
        Some(cfg) => {
            let client = analysis::HttpAnalysisClient::new(&cfg.endpoint, cfg.api_key.clone())?;
            Some(Arc::new(analysis::FeedbackAdjuster::new(Arc::new(client))))
        }
        None => {
            tracing::info!("analysis endpoint not configured; serving baseline budgets only");
            None
        }
    };

    let voice: Arc<dyn VoiceCapture> = match &config.voice {
        Some(cfg) => Arc::new(voice::HttpTranscriber::new(&cfg.endpoint, cfg.api_key.clone())?),
        None => Arc::new(voice::UnsupportedVoice),
    };

    if config.jwt_secret.is_none() {
        tracing::warn!("jwt secret not configured; feedback persistence is disabled");
    }

    let state = Arc::new(api::AppState {
        config,
        store,
        adjuster,
        voice,
    });

    api::serve(state).await
}
