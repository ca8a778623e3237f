//! Budget module - criteria, fixed-ratio allocation and advisory adjustments.
//!
//! # Key Concepts
//! - Criteria: a student's monthly income and expense estimates
//! - Allocation: pure derivation of budget categories from criteria
//! - Adjustment: advisory correction produced by the feedback analysis
//!   collaborator, attached to a plan but never overwriting it

mod adjustment;
mod allocator;
mod criteria;

pub use adjustment::{AdjustedPlan, BudgetAdjustment, CategoryHint};
pub use allocator::{allocate, BudgetCategory, BudgetHealth, BudgetPlan, CategoryKind, CategoryName};
pub use criteria::BudgetCriteria;
