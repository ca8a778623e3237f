//! Budget computation endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use crate::analysis::{AdjustOutcome, AnalysisRequest};
use crate::budget::{allocate, AdjustedPlan, BudgetCriteria, BudgetPlan};
use crate::auth;
use crate::content::{self, LocalContent};

use super::routes::{internal_error, AppState};
use super::types::{AdjustedBudgetResponse, BudgetRequest, BudgetResponse};

/// Baseline plan from form input. Pure computation; never fails.
pub async fn compute(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<BudgetRequest>,
) -> Json<BudgetResponse> {
    let criteria = req.criteria();

    // A new submission supersedes any analysis still in flight for this
    // user. Anonymous submissions have no session to invalidate.
    if let (Some(adjuster), Some(secret)) = (&state.adjuster, state.config.jwt_secret.as_deref()) {
        if let Some(user_id) = auth::user_from_headers(&headers, secret) {
            adjuster.invalidate(&user_id);
        }
    }

    let plan = allocate(&criteria);
    tracing::debug!(
        total_budgeted = plan.total_budgeted,
        health = ?plan.health,
        "budget computed"
    );
    Json(BudgetResponse { criteria, plan })
}

fn baseline(
    criteria: BudgetCriteria,
    plan: BudgetPlan,
    notice: Option<&str>,
) -> Json<AdjustedBudgetResponse> {
    Json(AdjustedBudgetResponse {
        criteria,
        plan: AdjustedPlan::baseline(plan),
        notice: notice.map(str::to_string),
    })
}

/// Plan with the user's prior feedback analyzed into an advisory
/// adjustment. Every failure mode of the collaborator chain degrades to
/// the baseline plan with a notice; only storage errors are surfaced as
/// server errors.
pub async fn compute_adjusted(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<BudgetRequest>,
) -> Result<Json<AdjustedBudgetResponse>, (StatusCode, String)> {
    let criteria = req.criteria();
    let plan = allocate(&criteria);

    let Some(secret) = state.config.jwt_secret.as_deref() else {
        return Ok(baseline(
            criteria,
            plan,
            Some("Sign-in is not configured; using standard budget calculations"),
        ));
    };
    let Some(user_id) = auth::user_from_headers(&headers, secret) else {
        return Ok(baseline(
            criteria,
            plan,
            Some("Sign in to apply your past feedback to this budget"),
        ));
    };
    let Some(adjuster) = state.adjuster.as_ref() else {
        return Ok(baseline(
            criteria,
            plan,
            Some("Feedback analysis is not configured; using standard budget calculations"),
        ));
    };

    let previous = state
        .store
        .latest_for_user(&user_id)
        .map_err(internal_error)?;
    let Some(previous) = previous else {
        // Nothing to analyze yet; the baseline is the answer.
        return Ok(baseline(criteria, plan, None));
    };

    let request = AnalysisRequest {
        feedback_text: previous.feedback_text,
        budget_data: previous.budget_data,
        current_criteria: criteria.clone(),
    };

    match adjuster.analyze(&user_id, request).await {
        AdjustOutcome::Adjusted(adjustment) => {
            tracing::info!(user_id = %user_id, "advisory adjustment applied");
            Ok(Json(AdjustedBudgetResponse {
                criteria,
                plan: AdjustedPlan::with_advisory(plan, adjustment),
                notice: None,
            }))
        }
        AdjustOutcome::Pending => Ok(baseline(
            criteria,
            plan,
            Some("A feedback analysis is already in progress"),
        )),
        AdjustOutcome::Stale => Ok(baseline(
            criteria,
            plan,
            Some("Your budget changed during analysis; showing the standard calculation"),
        )),
        AdjustOutcome::Failed(_) => Ok(baseline(
            criteria,
            plan,
            Some("Could not apply feedback; using standard budget calculations"),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub location: Option<String>,
}

/// Static tips and location-flavored recommendations.
pub async fn content(Query(q): Query<ContentQuery>) -> Json<LocalContent> {
    Json(content::for_location(q.location.as_deref()))
}
