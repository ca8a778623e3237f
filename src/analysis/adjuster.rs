//! Single-flight guard around the analysis collaborator.
//!
//! Each user session allows at most one analysis request in flight at a
//! time; attempting a second while one is outstanding is refused rather
//! than queued. A new form submission invalidates that session's
//! outstanding work, and a response that resolves after invalidation is
//! discarded, never applied to newer criteria. Sessions are independent:
//! one user's activity never blocks or invalidates another's.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use crate::budget::BudgetAdjustment;

use super::{AnalysisError, AnalysisRequest, TextAnalysis};

/// What came out of an analysis attempt.
#[derive(Debug)]
pub enum AdjustOutcome {
    /// The collaborator produced an advisory adjustment.
    Adjusted(BudgetAdjustment),
    /// Another request is already in flight for this session; nothing was
    /// issued.
    Pending,
    /// The criteria changed while the request was in flight; the response
    /// was discarded.
    Stale,
    /// The remote call failed; fall back to the unadjusted plan.
    Failed(AnalysisError),
}

/// In-flight flag, criteria generation, and cancellation for one session.
#[derive(Default)]
struct SessionGuard {
    in_flight: AtomicBool,
    generation: AtomicU64,
    cancel: Mutex<CancellationToken>,
}

pub struct FeedbackAdjuster {
    analysis: Arc<dyn TextAnalysis>,
    sessions: Mutex<HashMap<String, Arc<SessionGuard>>>,
}

impl FeedbackAdjuster {
    pub fn new(analysis: Arc<dyn TextAnalysis>) -> Self {
        Self {
            analysis,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn session(&self, user_id: &str) -> Arc<SessionGuard> {
        let mut sessions = self.sessions.lock().unwrap();
        Arc::clone(sessions.entry(user_id.to_string()).or_default())
    }

    /// Invalidate any outstanding analysis for one user. Called when a new
    /// submission replaces that user's current criteria.
    pub fn invalidate(&self, user_id: &str) {
        let session = self.session(user_id);
        session.generation.fetch_add(1, Ordering::SeqCst);
        let mut guard = session.cancel.lock().unwrap();
        guard.cancel();
        *guard = CancellationToken::new();
    }

    /// Run one analysis for a user. Refuses to start while that user
    /// already has a request outstanding.
    pub async fn analyze(&self, user_id: &str, request: AnalysisRequest) -> AdjustOutcome {
        let session = self.session(user_id);

        if session.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(user_id = %user_id, "analysis refused: a request is already in flight");
            return AdjustOutcome::Pending;
        }

        let generation = session.generation.load(Ordering::SeqCst);
        let cancel = session.cancel.lock().unwrap().clone();

        let result = tokio::select! {
            _ = cancel.cancelled() => None,
            res = self.analysis.analyze(&request) => Some(res),
        };

        session.in_flight.store(false, Ordering::SeqCst);

        // The criteria this request was built from are no longer current.
        if session.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(user_id = %user_id, "discarding stale analysis response");
            return AdjustOutcome::Stale;
        }

        match result {
            None => AdjustOutcome::Stale,
            Some(Ok(adjustment)) => AdjustOutcome::Adjusted(adjustment),
            Some(Err(e)) => {
                tracing::warn!(user_id = %user_id, "feedback analysis failed: {}", e);
                AdjustOutcome::Failed(e)
            }
        }
    }
}
