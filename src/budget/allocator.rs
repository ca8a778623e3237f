//! Fixed-ratio budget allocation.
//!
//! `allocate` is pure and total: it performs no I/O and must not fail for
//! any finite input, including criteria whose expenses exceed income. A
//! negative remainder flows through the ratios verbatim and is reported as
//! a `Warning` plan rather than being clamped.

use serde::Serialize;

use super::criteria::BudgetCriteria;

/// Largest share of remaining funds that savings may claim.
const SAVINGS_CAP: f64 = 0.20;

/// Flexible-category shares of discretionary funds. They sum to 1.0; each
/// amount is rounded independently, so the rounded sum may drift from the
/// rounded discretionary total by a few units. Accepted, not corrected.
const ENTERTAINMENT_SHARE: f64 = 0.30;
const PERSONAL_CARE_SHARE: f64 = 0.15;
const EMERGENCY_FUND_SHARE: f64 = 0.25;
const MISCELLANEOUS_SHARE: f64 = 0.30;

/// How a budget line is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Echoes a user-entered expense unmodified.
    Fixed,
    /// Fixed percentage of leftover discretionary funds.
    Flexible,
    Savings,
}

/// The fixed set of category names, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryName {
    #[serde(rename = "Housing/Rent")]
    Housing,
    #[serde(rename = "Food/Meals")]
    Food,
    #[serde(rename = "Insurance")]
    Insurance,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
    #[serde(rename = "Savings")]
    Savings,
}

impl CategoryName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "Housing/Rent",
            Self::Food => "Food/Meals",
            Self::Insurance => "Insurance",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::PersonalCare => "Personal Care",
            Self::EmergencyFund => "Emergency Fund",
            Self::Miscellaneous => "Miscellaneous",
            Self::Savings => "Savings",
        }
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single budget line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetCategory {
    pub name: CategoryName,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

/// Whether the plan fits within the stated income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Healthy,
    Warning,
}

/// An allocation result: nine categories in display order plus totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub categories: Vec<BudgetCategory>,
    pub total_budgeted: f64,
    /// Income left over after everything budgeted. Negative for warning plans.
    pub remaining: f64,
    pub health: BudgetHealth,
}

/// Derive a budget plan from criteria.
///
/// Fixed categories echo their input fields exactly. Savings is capped at
/// both the stated goal and 20% of the post-fixed remainder; the remainder
/// after savings is split across the four flexible categories, each rounded
/// to the nearest whole unit.
pub fn allocate(criteria: &BudgetCriteria) -> BudgetPlan {
    let fixed_total =
        criteria.housing + criteria.meal_plan + criteria.textbooks + criteria.transportation;
    let remaining = criteria.monthly_income - fixed_total;
    // No flooring at zero: an overspent month yields negative savings and
    // negative flexible amounts, surfaced verbatim.
    let recommended_savings = criteria.savings_goal.min(remaining * SAVINGS_CAP);
    let discretionary = remaining - recommended_savings;

    let categories = vec![
        BudgetCategory {
            name: CategoryName::Housing,
            amount: criteria.housing,
            kind: CategoryKind::Fixed,
        },
        BudgetCategory {
            name: CategoryName::Food,
            amount: criteria.meal_plan,
            kind: CategoryKind::Fixed,
        },
        BudgetCategory {
            name: CategoryName::Insurance,
            amount: criteria.textbooks,
            kind: CategoryKind::Fixed,
        },
        BudgetCategory {
            name: CategoryName::Transportation,
            amount: criteria.transportation,
            kind: CategoryKind::Fixed,
        },
        BudgetCategory {
            name: CategoryName::Entertainment,
            amount: (discretionary * ENTERTAINMENT_SHARE).round(),
            kind: CategoryKind::Flexible,
        },
        BudgetCategory {
            name: CategoryName::PersonalCare,
            amount: (discretionary * PERSONAL_CARE_SHARE).round(),
            kind: CategoryKind::Flexible,
        },
        BudgetCategory {
            name: CategoryName::EmergencyFund,
            amount: (discretionary * EMERGENCY_FUND_SHARE).round(),
            kind: CategoryKind::Flexible,
        },
        BudgetCategory {
            name: CategoryName::Miscellaneous,
            amount: (discretionary * MISCELLANEOUS_SHARE).round(),
            kind: CategoryKind::Flexible,
        },
        BudgetCategory {
            name: CategoryName::Savings,
            amount: recommended_savings.round(),
            kind: CategoryKind::Savings,
        },
    ];

    let total_budgeted: f64 = categories.iter().map(|c| c.amount).sum();
    let health = if total_budgeted <= criteria.monthly_income {
        BudgetHealth::Healthy
    } else {
        BudgetHealth::Warning
    };

    BudgetPlan {
        remaining: criteria.monthly_income - total_budgeted,
        total_budgeted,
        health,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(
        monthly_income: f64,
        housing: f64,
        meal_plan: f64,
        textbooks: f64,
        transportation: f64,
        savings_goal: f64,
    ) -> BudgetCriteria {
        BudgetCriteria {
            monthly_income,
            tuition: 0.0,
            housing,
            meal_plan,
            textbooks,
            transportation,
            savings_goal,
        }
    }

    fn amount(plan: &BudgetPlan, name: CategoryName) -> f64 {
        plan.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
            .unwrap()
    }

    #[test]
    fn test_nine_categories_in_display_order() {
        let plan = allocate(&criteria(1500.0, 800.0, 300.0, 100.0, 100.0, 200.0));
        let names: Vec<CategoryName> = plan.categories.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                CategoryName::Housing,
                CategoryName::Food,
                CategoryName::Insurance,
                CategoryName::Transportation,
                CategoryName::Entertainment,
                CategoryName::PersonalCare,
                CategoryName::EmergencyFund,
                CategoryName::Miscellaneous,
                CategoryName::Savings,
            ]
        );
    }

    #[test]
    fn test_healthy_allocation() {
        // income=1500, fixed=1300, remaining=200, savings=min(200, 40)=40,
        // discretionary=160.
        let plan = allocate(&criteria(1500.0, 800.0, 300.0, 100.0, 100.0, 200.0));

        assert_eq!(amount(&plan, CategoryName::Housing), 800.0);
        assert_eq!(amount(&plan, CategoryName::Food), 300.0);
        assert_eq!(amount(&plan, CategoryName::Insurance), 100.0);
        assert_eq!(amount(&plan, CategoryName::Transportation), 100.0);
        assert_eq!(amount(&plan, CategoryName::Entertainment), 48.0);
        assert_eq!(amount(&plan, CategoryName::PersonalCare), 24.0);
        assert_eq!(amount(&plan, CategoryName::EmergencyFund), 40.0);
        assert_eq!(amount(&plan, CategoryName::Miscellaneous), 48.0);
        assert_eq!(amount(&plan, CategoryName::Savings), 40.0);

        assert_eq!(plan.total_budgeted, 1500.0);
        assert_eq!(plan.remaining, 0.0);
        // Equal to income still counts as healthy.
        assert_eq!(plan.health, BudgetHealth::Healthy);
    }

    #[test]
    fn test_overspent_allocation_goes_negative() {
        // income=1000, fixed=1200, remaining=-200, savings=min(100, -40)=-40,
        // discretionary=-160. Negative flexible amounts are produced verbatim.
        let plan = allocate(&criteria(1000.0, 900.0, 300.0, 0.0, 0.0, 100.0));

        assert_eq!(amount(&plan, CategoryName::Savings), -40.0);
        assert_eq!(amount(&plan, CategoryName::Entertainment), -48.0);
        assert_eq!(amount(&plan, CategoryName::PersonalCare), -24.0);
        assert_eq!(amount(&plan, CategoryName::EmergencyFund), -40.0);
        assert_eq!(amount(&plan, CategoryName::Miscellaneous), -48.0);
        assert_eq!(plan.health, BudgetHealth::Warning);
    }

    #[test]
    fn test_fixed_amounts_echo_inputs_exactly() {
        let plan = allocate(&criteria(2000.0, 850.5, 310.25, 99.99, 120.01, 150.0));
        assert_eq!(amount(&plan, CategoryName::Housing), 850.5);
        assert_eq!(amount(&plan, CategoryName::Food), 310.25);
        assert_eq!(amount(&plan, CategoryName::Insurance), 99.99);
        assert_eq!(amount(&plan, CategoryName::Transportation), 120.01);
    }

    #[test]
    fn test_savings_capped_by_goal_and_remainder() {
        // remaining=1000, 20% cap=200 < goal=500.
        let plan = allocate(&criteria(1000.0, 0.0, 0.0, 0.0, 0.0, 500.0));
        assert_eq!(amount(&plan, CategoryName::Savings), 200.0);

        // goal=50 < cap=200.
        let plan = allocate(&criteria(1000.0, 0.0, 0.0, 0.0, 0.0, 50.0));
        assert_eq!(amount(&plan, CategoryName::Savings), 50.0);
    }

    #[test]
    fn test_zero_income() {
        let plan = allocate(&criteria(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(plan.categories.len(), 9);
        assert!(plan.categories.iter().all(|c| c.amount == 0.0));
        assert_eq!(plan.health, BudgetHealth::Healthy);
    }

    #[test]
    fn test_tuition_not_in_fixed_total() {
        let mut with_tuition = criteria(1500.0, 800.0, 300.0, 100.0, 100.0, 200.0);
        with_tuition.tuition = 5000.0;
        let without = allocate(&criteria(1500.0, 800.0, 300.0, 100.0, 100.0, 200.0));
        assert_eq!(allocate(&with_tuition), without);
    }

    #[test]
    fn test_flexible_shares_cover_discretionary_before_rounding() {
        let shares =
            ENTERTAINMENT_SHARE + PERSONAL_CARE_SHARE + EMERGENCY_FUND_SHARE + MISCELLANEOUS_SHARE;
        assert!((shares - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_names_serialize_to_display_labels() {
        let json = serde_json::to_value(CategoryName::PersonalCare).unwrap();
        assert_eq!(json, "Personal Care");
        let json = serde_json::to_value(CategoryName::Housing).unwrap();
        assert_eq!(json, "Housing/Rent");
    }
}
