//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spendsight_shared::types::BudgetId;

use super::status::BudgetStatus;

/// A budget record.
///
/// One per category; the store keeps categories unique per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budgeted category name.
    pub category: String,
    /// Monthly spending limit.
    #[serde(default)]
    pub budget_limit: Decimal,
    /// Current-month actual. Derived by reconciliation against expense
    /// aggregates, not persisted by this engine.
    #[serde(default)]
    pub spent: Decimal,
}

impl Budget {
    /// Health status from the current limit and spent amounts.
    #[must_use]
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::classify(self.budget_limit, self.spent)
    }
}

/// Input for creating a new budget.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBudgetInput {
    /// Budgeted category name.
    pub category: String,
    /// Monthly spending limit.
    pub budget_limit: Decimal,
}

/// Number of budgets in each status tier.
///
/// All three tiers are always present; an empty budget list reports zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Budgets comfortably within their limit.
    pub good: usize,
    /// Budgets near their limit.
    pub warning: usize,
    /// Budgets over their limit.
    pub over_budget: usize,
}

/// Aggregate totals across all budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// Sum of all budget limits.
    pub total_budget: Decimal,
    /// Sum of all spent amounts.
    pub total_spent: Decimal,
    /// `total_budget - total_spent`; negative when overspent overall.
    pub remaining: Decimal,
    /// Spend as a percentage of the total budget, rounded to 2 decimal
    /// places. Zero when there is no budget; may exceed 100.
    pub percentage_spent: Decimal,
    /// Budgets per status tier.
    pub status_counts: StatusCounts,
    /// Number of budgeted categories.
    pub budget_count: usize,
}

/// Chart-ready budget vs actual comparison.
///
/// Parallel vectors in budget input order, one entry per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetComparisonChart {
    /// Category names.
    pub labels: Vec<String>,
    /// Spent amount per category.
    pub spent: Vec<Decimal>,
    /// Budget limit per category.
    pub limits: Vec<Decimal>,
}
