//! Flat expense records as exchanged with the store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spendsight_shared::types::{CurrencyCode, ExpenseId};

use super::error::ExpenseError;
use super::types::{
    EndRepeat, Expense, Frequency, Recurrence, RecurrenceEnd, RecurrenceRule, RecurringType,
};

/// Wire-format expense record.
///
/// Field names and nullability mirror the store's JSON. Create payloads
/// carry no `id`; missing numeric fields deserialize as zero so a sparse
/// record never sinks a whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Store-assigned id; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    /// Category name.
    pub category: String,
    /// Amount in `currency`.
    #[serde(default)]
    pub amount: Decimal,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Currency code; the store defaults omitted currencies to GBP.
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Whether the expense recurs.
    #[serde(default)]
    pub recurring: bool,
    /// Repeat cadence; only when `recurring`.
    #[serde(default)]
    pub recurring_type: Option<RecurringType>,
    /// Custom cadence unit; only when `recurring_type` is `custom`.
    #[serde(default)]
    pub frequency: Option<Frequency>,
    /// Custom cadence multiplier; only when `recurring_type` is `custom`.
    #[serde(default)]
    pub interval: Option<u32>,
    /// How the recurrence stops; only when `recurring`.
    #[serde(default)]
    pub end_repeat: Option<EndRepeat>,
    /// Last repeat date; only when `end_repeat` is `on_date`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// The structured rule for a non-custom recurring type.
const fn plain_rule(kind: RecurringType) -> Option<RecurrenceRule> {
    match kind {
        RecurringType::Daily => Some(RecurrenceRule::Daily),
        RecurringType::Weekly => Some(RecurrenceRule::Weekly),
        RecurringType::EveryTwoWeeks => Some(RecurrenceRule::EveryTwoWeeks),
        RecurringType::Monthly => Some(RecurrenceRule::Monthly),
        RecurringType::Yearly => Some(RecurrenceRule::Yearly),
        RecurringType::Custom => None,
    }
}

impl ExpenseRecord {
    /// Builds the structured recurrence descriptor from the flat fields.
    ///
    /// # Errors
    ///
    /// Returns an `ExpenseError` when the flat fields violate the
    /// recurrence rules: stray fields on a non-recurring record, a missing
    /// recurring type, frequency/interval outside a custom cadence, a zero
    /// interval, or an end date that is missing, stray, or earlier than
    /// the expense date.
    pub fn recurrence(&self) -> Result<Option<Recurrence>, ExpenseError> {
        if !self.recurring {
            if self.recurring_type.is_some()
                || self.frequency.is_some()
                || self.interval.is_some()
                || self.end_repeat.is_some()
                || self.end_date.is_some()
            {
                return Err(ExpenseError::UnexpectedRecurrence);
            }
            return Ok(None);
        }

        let kind = self
            .recurring_type
            .ok_or(ExpenseError::MissingRecurringType)?;

        let rule = if let Some(plain) = plain_rule(kind) {
            if self.frequency.is_some() || self.interval.is_some() {
                return Err(ExpenseError::CustomFieldsNotAllowed { kind });
            }
            plain
        } else {
            let (Some(frequency), Some(interval)) = (self.frequency, self.interval) else {
                return Err(ExpenseError::CustomFieldsRequired);
            };
            if interval == 0 {
                return Err(ExpenseError::InvalidInterval);
            }
            RecurrenceRule::Custom {
                frequency,
                interval,
            }
        };

        // The store leaves end_repeat null on records created before the
        // field existed; those repeat indefinitely.
        let end = match self.end_repeat.unwrap_or(EndRepeat::Never) {
            EndRepeat::Never => {
                if self.end_date.is_some() {
                    return Err(ExpenseError::UnexpectedEndDate);
                }
                RecurrenceEnd::Never
            }
            EndRepeat::OnDate => {
                let end_date = self.end_date.ok_or(ExpenseError::EndDateRequired)?;
                if end_date < self.date {
                    return Err(ExpenseError::EndDateBeforeExpense {
                        end_date,
                        date: self.date,
                    });
                }
                RecurrenceEnd::OnDate(end_date)
            }
        };

        Ok(Some(Recurrence { rule, end }))
    }
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ExpenseError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        let recurrence = record.recurrence()?;
        let id = record.id.ok_or(ExpenseError::MissingId)?;

        Ok(Self {
            id,
            category: record.category,
            amount: record.amount,
            date: record.date,
            description: record.description,
            currency: record.currency,
            recurrence,
        })
    }
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        let (recurring_type, frequency, interval, end_repeat, end_date) = match expense.recurrence {
            None => (None, None, None, None, None),
            Some(recurrence) => {
                let (frequency, interval) = match recurrence.rule {
                    RecurrenceRule::Custom {
                        frequency,
                        interval,
                    } => (Some(frequency), Some(interval)),
                    _ => (None, None),
                };
                let (end_repeat, end_date) = match recurrence.end {
                    RecurrenceEnd::Never => (Some(EndRepeat::Never), None),
                    RecurrenceEnd::OnDate(date) => (Some(EndRepeat::OnDate), Some(date)),
                };
                (
                    Some(recurrence.rule.recurring_type()),
                    frequency,
                    interval,
                    end_repeat,
                    end_date,
                )
            }
        };

        Self {
            id: Some(expense.id),
            category: expense.category.clone(),
            amount: expense.amount,
            date: expense.date,
            description: expense.description.clone(),
            currency: expense.currency.clone(),
            recurring: expense.recurrence.is_some(),
            recurring_type,
            frequency,
            interval,
            end_repeat,
            end_date,
        }
    }
}
