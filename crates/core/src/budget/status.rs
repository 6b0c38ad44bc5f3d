//! Budget status classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Health classification of a single budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Comfortably within the limit.
    Good,
    /// Nearly used up: remaining is below 20% of the limit.
    Warning,
    /// Spent more than the limit.
    OverBudget,
}

impl BudgetStatus {
    /// Classifies a budget from its limit and spent-to-date amounts.
    ///
    /// Remaining below zero is over budget; remaining below 20% of the
    /// limit is a warning; everything else is good. Both checks are
    /// strict, so a zero-limit budget with nothing spent classifies as
    /// `Good` and spending exactly the limit is a `Warning`.
    #[must_use]
    pub fn classify(budget_limit: Decimal, spent: Decimal) -> Self {
        let remaining = budget_limit - spent;

        if remaining < Decimal::ZERO {
            Self::OverBudget
        } else if remaining < budget_limit * Decimal::new(2, 1) {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Warning => write!(f, "Warning (near limit)"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

impl std::str::FromStr for BudgetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "warning" => Ok(Self::Warning),
            "over_budget" => Ok(Self::OverBudget),
            _ => Err(format!("Unknown budget status: {s}")),
        }
    }
}
