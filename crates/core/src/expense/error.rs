//! Expense error types.

use chrono::NaiveDate;
use thiserror::Error;

use spendsight_shared::AppError;

use super::types::RecurringType;

/// Expense-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Record has no store-assigned id.
    #[error("Expense record has no id")]
    MissingId,

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Expense date cannot be in the future.
    #[error("Expense date cannot be in the future: {0}")]
    FutureDate(NaiveDate),

    /// Recurring expense without a recurring type.
    #[error("Recurring type is required for a recurring expense")]
    MissingRecurringType,

    /// Recurrence fields on a non-recurring expense.
    #[error("Recurrence fields are not allowed on a non-recurring expense")]
    UnexpectedRecurrence,

    /// Custom recurrence without frequency or interval.
    #[error("Custom recurrence requires frequency and interval")]
    CustomFieldsRequired,

    /// Frequency or interval outside a custom recurrence.
    #[error("Frequency and interval are only allowed for custom recurrence, got {kind}")]
    CustomFieldsNotAllowed {
        /// The non-custom recurring type that carried the fields.
        kind: RecurringType,
    },

    /// Interval must be at least 1.
    #[error("Interval must be a positive number")]
    InvalidInterval,

    /// Recurrence ends on a date but no end date was given.
    #[error("End date is required when the recurrence ends on a date")]
    EndDateRequired,

    /// End date on a recurrence that never ends.
    #[error("End date is only allowed when the recurrence ends on a date")]
    UnexpectedEndDate,

    /// End date earlier than the expense date.
    #[error("End date {end_date} is before the expense date {date}")]
    EndDateBeforeExpense {
        /// The offending end date.
        end_date: NaiveDate,
        /// The expense date it must not precede.
        date: NaiveDate,
    },
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_validation_app_error() {
        let err = AppError::from(ExpenseError::NegativeAmount);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.status_code(), 400);
    }
}
