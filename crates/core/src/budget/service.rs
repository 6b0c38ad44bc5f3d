//! Budget service for aggregate totals and validation.

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::status::BudgetStatus;
use super::types::{Budget, BudgetComparisonChart, BudgetOverview, CreateBudgetInput, StatusCounts};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Aggregate totals and status counts across all budgets.
    ///
    /// An empty list produces an all-zero overview; a zero total budget
    /// reports 0% spent rather than dividing by zero.
    #[must_use]
    pub fn overview(budgets: &[Budget]) -> BudgetOverview {
        let total_budget: Decimal = budgets.iter().map(|budget| budget.budget_limit).sum();
        let total_spent: Decimal = budgets.iter().map(|budget| budget.spent).sum();
        let remaining = total_budget - total_spent;

        let percentage_spent = if total_budget.is_zero() {
            Decimal::ZERO
        } else {
            (total_spent / total_budget * Decimal::ONE_HUNDRED).round_dp(2)
        };

        let mut status_counts = StatusCounts::default();
        for budget in budgets {
            match budget.status() {
                BudgetStatus::Good => status_counts.good += 1,
                BudgetStatus::Warning => status_counts.warning += 1,
                BudgetStatus::OverBudget => status_counts.over_budget += 1,
            }
        }

        BudgetOverview {
            total_budget,
            total_spent,
            remaining,
            percentage_spent,
            status_counts,
            budget_count: budgets.len(),
        }
    }

    /// Validate a budget payload before it is submitted to the store.
    ///
    /// Uniqueness is checked against the already-fetched budgets with
    /// case-sensitive equality, the same test the store applies.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::LimitNotPositive` if the limit is zero or
    /// negative, and `BudgetError::DuplicateCategory` if a budget for the
    /// category already exists.
    pub fn validate_new(
        existing: &[Budget],
        input: &CreateBudgetInput,
    ) -> Result<(), BudgetError> {
        if input.budget_limit <= Decimal::ZERO {
            return Err(BudgetError::LimitNotPositive);
        }

        if existing
            .iter()
            .any(|budget| budget.category == input.category)
        {
            return Err(BudgetError::DuplicateCategory(input.category.clone()));
        }

        Ok(())
    }

    /// Chart-ready budget vs actual series, in budget input order.
    #[must_use]
    pub fn comparison_chart(budgets: &[Budget]) -> BudgetComparisonChart {
        BudgetComparisonChart {
            labels: budgets.iter().map(|budget| budget.category.clone()).collect(),
            spent: budgets.iter().map(|budget| budget.spent).collect(),
            limits: budgets.iter().map(|budget| budget.budget_limit).collect(),
        }
    }
}
