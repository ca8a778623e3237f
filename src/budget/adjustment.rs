//! Advisory adjustments from the feedback analysis collaborator.
//!
//! The collaborator returns an explanation plus optional per-category hints.
//! Hints are advisory and non-authoritative: they ride along with the plan
//! for the presenter to surface, but the fixed-ratio amounts are never
//! rewritten from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::allocator::BudgetPlan;

/// A hint for a single category: a multiplier on the planned amount, a
/// proposed override, or both. No schema is enforced beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryHint {
    pub scale: Option<f64>,
    pub amount: Option<f64>,
}

/// Structured adjustment returned by the text-analysis collaborator.
///
/// Only `explanation` is required; responses carrying extra fields are
/// accepted and the extras ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAdjustment {
    /// Human-readable reasoning, surfaced to the user as-is.
    pub explanation: String,
    /// Keyed by category display name (e.g. "Entertainment").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, CategoryHint>,
}

/// A baseline plan with an optional advisory adjustment attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedPlan {
    #[serde(flatten)]
    pub plan: BudgetPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<BudgetAdjustment>,
}

impl AdjustedPlan {
    /// A plan with no adjustment applied - the fallback for every failure
    /// mode of the analysis collaborator.
    pub fn baseline(plan: BudgetPlan) -> Self {
        Self {
            plan,
            adjustment: None,
        }
    }

    /// Attach an advisory adjustment. Category amounts are left untouched.
    pub fn with_advisory(plan: BudgetPlan, adjustment: BudgetAdjustment) -> Self {
        Self {
            plan,
            adjustment: Some(adjustment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{allocate, BudgetCriteria};

    #[test]
    fn test_explanation_is_required() {
        let result: Result<BudgetAdjustment, _> =
            serde_json::from_str(r#"{"categories": {"Entertainment": {"scale": 0.8}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_hints_and_extra_fields_are_optional() {
        let adjustment: BudgetAdjustment = serde_json::from_str(
            r#"{
                "explanation": "You mentioned overspending on eating out.",
                "categories": {"Entertainment": {"scale": 0.8}, "Savings": {"amount": 60}},
                "confidence": 0.92
            }"#,
        )
        .unwrap();

        assert_eq!(
            adjustment.explanation,
            "You mentioned overspending on eating out."
        );
        assert_eq!(
            adjustment.categories["Entertainment"].scale,
            Some(0.8)
        );
        assert_eq!(adjustment.categories["Savings"].amount, Some(60.0));

        let bare: BudgetAdjustment =
            serde_json::from_str(r#"{"explanation": "Looks reasonable."}"#).unwrap();
        assert!(bare.categories.is_empty());
    }

    #[test]
    fn test_advisory_leaves_amounts_untouched() {
        let plan = allocate(&BudgetCriteria {
            monthly_income: 1500.0,
            housing: 800.0,
            meal_plan: 300.0,
            textbooks: 100.0,
            transportation: 100.0,
            savings_goal: 200.0,
            ..Default::default()
        });
        let baseline = plan.clone();

        let adjustment = BudgetAdjustment {
            explanation: "Cut entertainment in half.".to_string(),
            categories: [(
                "Entertainment".to_string(),
                CategoryHint {
                    scale: Some(0.5),
                    amount: None,
                },
            )]
            .into_iter()
            .collect(),
        };

        let adjusted = AdjustedPlan::with_advisory(plan, adjustment);
        assert_eq!(adjusted.plan, baseline);
        assert!(adjusted.adjustment.is_some());
    }
}
