//! Budget input model.

use serde::{Deserialize, Serialize};

/// A student's monthly income and expense estimates.
///
/// Created fresh per form submission and never mutated afterwards; a new
/// submission replaces the previous value. No cross-field invariant is
/// enforced at input time - expenses may exceed income.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetCriteria {
    /// Jobs, financial aid, family support.
    pub monthly_income: f64,
    /// Collected for context; billed per term, so it is not part of the
    /// monthly fixed total.
    pub tuition: f64,
    pub housing: f64,
    pub meal_plan: f64,
    /// Textbooks, supplies and insurance.
    pub textbooks: f64,
    pub transportation: f64,
    /// How much the student would like to save each month.
    pub savings_goal: f64,
}
