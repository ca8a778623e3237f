//! Client module for the feedback text-analysis collaborator.
//!
//! This module provides a trait-based abstraction over analysis providers,
//! with a plain HTTP endpoint as the primary implementation. The provider
//! is untrusted and fallible: every failure path degrades to "no
//! adjustment" so the caller can serve the baseline allocation.

mod adjuster;
mod error;
mod http;

pub use adjuster::{AdjustOutcome, FeedbackAdjuster};
pub use error::AnalysisError;
pub use http::HttpAnalysisClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetAdjustment, BudgetCriteria};

/// Payload sent to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Free-text comment from the prior feedback record.
    pub feedback_text: String,
    /// Criteria as persisted alongside that feedback.
    pub budget_data: BudgetCriteria,
    /// Criteria the user just submitted.
    pub current_criteria: BudgetCriteria,
}

/// Trait for text-analysis providers.
#[async_trait]
pub trait TextAnalysis: Send + Sync {
    /// Analyze prior feedback against the current criteria.
    async fn analyze(&self, request: &AnalysisRequest)
        -> Result<BudgetAdjustment, AnalysisError>;
}
