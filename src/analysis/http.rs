//! HTTP implementation of the text-analysis provider.

use std::time::Duration;

use async_trait::async_trait;

use crate::budget::BudgetAdjustment;

use super::{AnalysisError, AnalysisRequest, TextAnalysis};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls a managed analysis endpoint with a JSON request/response contract.
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAnalysisClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, AnalysisError> {
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
impl TextAnalysis for HttpAnalysisClient {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<BudgetAdjustment, AnalysisError> {
        let mut req = self.http.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "analysis endpoint rejected request");
            return Err(AnalysisError::Status { status, body });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        // Some providers wrap the payload in an `adjustments` envelope;
        // bare adjustment objects are accepted too.
        let adjustment_value = match value.get("adjustments") {
            Some(inner) => inner.clone(),
            None => value,
        };
        let adjustment: BudgetAdjustment = serde_json::from_value(adjustment_value)?;

        tracing::debug!(
            explanation_len = adjustment.explanation.len(),
            hints = adjustment.categories.len(),
            "analysis response parsed"
        );
        Ok(adjustment)
    }
}
