//! Filters for expense and budget list views.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{Budget, BudgetStatus};
use crate::expense::Expense;

/// Filter for expense queries. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Keep only expenses in this category (case-insensitive).
    pub category: Option<String>,
    /// Keep only expenses of at least this amount.
    pub min_amount: Option<Decimal>,
    /// Keep only expenses of at most this amount.
    pub max_amount: Option<Decimal>,
    /// Keep only expenses on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Keep only expenses on or before this date.
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a single category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts to amounts within the given inclusive bounds.
    #[must_use]
    pub const fn with_amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Restricts to dates within the given inclusive bounds.
    #[must_use]
    pub const fn with_date_range(
        mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Whether the expense passes every set condition.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if !expense.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }
}

/// Filter for budget queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetFilter {
    /// Keep only budgets currently in this status.
    pub status: Option<BudgetStatus>,
}

impl BudgetFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to budgets in the given status.
    #[must_use]
    pub const fn with_status(mut self, status: BudgetStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
    }

    /// Whether the budget passes every set condition.
    #[must_use]
    pub fn matches(&self, budget: &Budget) -> bool {
        match self.status {
            Some(status) => budget.status() == status,
            None => true,
        }
    }
}
