//! Request/response types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::budget::{AdjustedPlan, BudgetCriteria, BudgetPlan};
use crate::input::Amount;

/// The seven free-text numeric fields of the budget form. Missing or
/// unparseable entries coerce to zero; submission never fails on input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetRequest {
    pub monthly_income: Amount,
    pub tuition: Amount,
    pub housing: Amount,
    pub meal_plan: Amount,
    pub textbooks: Amount,
    pub transportation: Amount,
    pub savings_goal: Amount,
}

impl BudgetRequest {
    pub fn criteria(&self) -> BudgetCriteria {
        BudgetCriteria {
            monthly_income: self.monthly_income.0,
            tuition: self.tuition.0,
            housing: self.housing.0,
            meal_plan: self.meal_plan.0,
            textbooks: self.textbooks.0,
            transportation: self.transportation.0,
            savings_goal: self.savings_goal.0,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub criteria: BudgetCriteria,
    #[serde(flatten)]
    pub plan: BudgetPlan,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedBudgetResponse {
    pub criteria: BudgetCriteria,
    #[serde(flatten)]
    pub plan: AdjustedPlan,
    /// User-visible note when the adjustment could not be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(flatten)]
    pub criteria: BudgetRequest,
    pub feedback_text: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub transcript: String,
    /// The transcript coerced to a number, ready to fill a form field.
    pub amount: f64,
}
