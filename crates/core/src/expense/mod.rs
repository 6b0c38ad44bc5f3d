//! Expense records, recurrence descriptors, and submission rules.

pub mod error;
pub mod record;
pub mod service;
pub mod types;

#[cfg(test)]
mod record_props;

pub use error::ExpenseError;
pub use record::ExpenseRecord;
pub use service::ExpenseService;
pub use types::{
    EndRepeat, Expense, Frequency, Recurrence, RecurrenceEnd, RecurrenceRule, RecurringType,
};
