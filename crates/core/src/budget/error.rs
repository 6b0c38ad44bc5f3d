//! Budget error types.

use thiserror::Error;

use spendsight_shared::AppError;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A budget for this category already exists.
    #[error("A budget for category '{0}' already exists")]
    DuplicateCategory(String),

    /// Budget limit must be a positive number.
    #[error("Budget limit must be a positive number")]
    LimitNotPositive,
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::DuplicateCategory(_) => Self::Conflict(err.to_string()),
            BudgetError::LimitNotPositive => Self::Validation(err.to_string()),
        }
    }
}
