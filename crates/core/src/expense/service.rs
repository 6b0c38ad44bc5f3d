//! Expense service for submission validation and vocabulary.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::record::ExpenseRecord;
use super::types::Expense;

/// Expense service for business logic.
pub struct ExpenseService;

impl ExpenseService {
    /// Validate an expense payload before it is submitted to the store.
    ///
    /// `today` is the session's current date, injected by the caller; the
    /// engine never reads a clock.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NegativeAmount` for a negative amount,
    /// `ExpenseError::FutureDate` for a date after `today`, and the
    /// recurrence errors of [`ExpenseRecord::recurrence`] for ill-formed
    /// recurrence fields.
    pub fn validate_submission(
        record: &ExpenseRecord,
        today: NaiveDate,
    ) -> Result<(), ExpenseError> {
        if record.amount < Decimal::ZERO {
            return Err(ExpenseError::NegativeAmount);
        }

        if record.date > today {
            return Err(ExpenseError::FutureDate(record.date));
        }

        record.recurrence()?;

        Ok(())
    }

    /// The distinct category names appearing in the user's expenses,
    /// ascending. Used to populate filter dropdowns.
    #[must_use]
    pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
        expenses
            .iter()
            .map(|expense| expense.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
