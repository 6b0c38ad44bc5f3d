//! Expense data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spendsight_shared::types::{CurrencyCode, ExpenseId};

/// Repeat cadence of a recurring expense, as named by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringType {
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every two weeks.
    EveryTwoWeeks,
    /// Repeats every month.
    Monthly,
    /// Repeats every year.
    Yearly,
    /// Repeats on a caller-defined frequency and interval.
    Custom,
}

impl std::fmt::Display for RecurringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::EveryTwoWeeks => "every_two_weeks",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

/// Base unit of a custom recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every `interval` days.
    Daily,
    /// Every `interval` weeks.
    Weekly,
    /// Every `interval` months.
    Monthly,
    /// Every `interval` years.
    Yearly,
}

/// How a recurrence stops, as named by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndRepeat {
    /// Repeats indefinitely.
    Never,
    /// Repeats until a given date.
    OnDate,
}

/// The repeat pattern of a recurring expense.
///
/// Frequency and interval only exist under `Custom`, so an ill-formed
/// combination is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every two weeks.
    EveryTwoWeeks,
    /// Repeats every month.
    Monthly,
    /// Repeats every year.
    Yearly,
    /// Repeats every `interval` units of `frequency`.
    Custom {
        /// Base unit of the cadence.
        frequency: Frequency,
        /// Number of units between occurrences (at least 1).
        interval: u32,
    },
}

impl RecurrenceRule {
    /// The store's flat name for this rule.
    #[must_use]
    pub const fn recurring_type(&self) -> RecurringType {
        match self {
            Self::Daily => RecurringType::Daily,
            Self::Weekly => RecurringType::Weekly,
            Self::EveryTwoWeeks => RecurringType::EveryTwoWeeks,
            Self::Monthly => RecurringType::Monthly,
            Self::Yearly => RecurringType::Yearly,
            Self::Custom { .. } => RecurringType::Custom,
        }
    }
}

/// When a recurrence stops producing occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceEnd {
    /// Repeats indefinitely.
    Never,
    /// Repeats until the given date (inclusive, never before the expense date).
    OnDate(NaiveDate),
}

/// Recurrence descriptor for a recurring expense.
///
/// The engine validates and carries this descriptor; it never expands it
/// into future occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// The repeat pattern.
    pub rule: RecurrenceRule,
    /// When the pattern stops.
    pub end: RecurrenceEnd,
}

/// An expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Category name. Opaque to the engine except for case-insensitive
    /// filter matching.
    pub category: String,
    /// Amount in the entered currency.
    pub amount: Decimal,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Currency the amount was entered in; stored, never converted.
    pub currency: CurrencyCode,
    /// Recurrence descriptor; `None` for a one-off expense.
    pub recurrence: Option<Recurrence>,
}
