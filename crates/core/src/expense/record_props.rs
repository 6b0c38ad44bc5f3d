//! Property-based tests for flat expense record validation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use spendsight_shared::types::{CurrencyCode, ExpenseId};

use super::error::ExpenseError;
use super::record::ExpenseRecord;
use super::types::{
    EndRepeat, Expense, Frequency, Recurrence, RecurrenceEnd, RecurrenceRule, RecurringType,
};

/// Strategy to generate a custom cadence unit.
fn frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

/// Strategy to generate a non-custom recurring type.
fn plain_type() -> impl Strategy<Value = RecurringType> {
    prop_oneof![
        Just(RecurringType::Daily),
        Just(RecurringType::Weekly),
        Just(RecurringType::EveryTwoWeeks),
        Just(RecurringType::Monthly),
        Just(RecurringType::Yearly),
    ]
}

/// Strategy to generate any structurally valid repeat rule.
fn rule() -> impl Strategy<Value = RecurrenceRule> {
    prop_oneof![
        Just(RecurrenceRule::Daily),
        Just(RecurrenceRule::Weekly),
        Just(RecurrenceRule::EveryTwoWeeks),
        Just(RecurrenceRule::Monthly),
        Just(RecurrenceRule::Yearly),
        (frequency(), 1u32..36).prop_map(|(frequency, interval)| RecurrenceRule::Custom {
            frequency,
            interval,
        }),
    ]
}

/// Strategy to generate a calendar date.
fn date() -> impl Strategy<Value = NaiveDate> {
    (2023i32..=2026, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

/// Helper to create a one-off record on the given date.
fn make_record(date: NaiveDate) -> ExpenseRecord {
    ExpenseRecord {
        id: Some(ExpenseId::from_raw(1)),
        category: "Groceries".to_string(),
        amount: dec!(10),
        date,
        description: None,
        currency: CurrencyCode::gbp(),
        recurring: false,
        recurring_type: None,
        frequency: None,
        interval: None,
        end_repeat: None,
        end_date: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Flattening an expense to the wire shape and parsing it back never
    /// loses or corrupts the recurrence descriptor.
    #[test]
    fn prop_flatten_then_parse_round_trips(
        rule in rule(),
        date in date(),
        end_offset in prop::option::of(0u64..365),
    ) {
        let end = match end_offset {
            None => RecurrenceEnd::Never,
            Some(offset) => {
                RecurrenceEnd::OnDate(date.checked_add_days(Days::new(offset)).unwrap())
            }
        };
        let expense = Expense {
            id: ExpenseId::from_raw(7),
            category: "Groceries".to_string(),
            amount: dec!(10),
            date,
            description: None,
            currency: CurrencyCode::gbp(),
            recurrence: Some(Recurrence { rule, end }),
        };

        let record = ExpenseRecord::from(&expense);
        prop_assert_eq!(Expense::try_from(record), Ok(expense));
    }

    /// Any single recurrence field on a non-recurring record is rejected.
    #[test]
    fn prop_one_off_with_stray_field_rejected(field in 0usize..5, date in date()) {
        let mut record = make_record(date);
        match field {
            0 => record.recurring_type = Some(RecurringType::Daily),
            1 => record.frequency = Some(Frequency::Weekly),
            2 => record.interval = Some(2),
            3 => record.end_repeat = Some(EndRepeat::Never),
            _ => record.end_date = Some(date),
        }

        let result = record.recurrence();
        prop_assert!(
            matches!(result, Err(ExpenseError::UnexpectedRecurrence)),
            "Stray field should be rejected, got: {:?}",
            result
        );
    }

    /// A recurring record with a plain type and no custom fields parses
    /// to the matching rule, ending never by default.
    #[test]
    fn prop_plain_recurrence_parses_to_matching_rule(
        kind in plain_type(),
        date in date(),
    ) {
        let record = ExpenseRecord {
            recurring: true,
            recurring_type: Some(kind),
            ..make_record(date)
        };

        let recurrence = record.recurrence().unwrap().unwrap();
        prop_assert_eq!(recurrence.rule.recurring_type(), kind);
        prop_assert_eq!(recurrence.end, RecurrenceEnd::Never);
    }

    /// A custom cadence needs a positive interval; anything above zero
    /// parses, zero is rejected.
    #[test]
    fn prop_custom_interval_must_be_positive(
        frequency in frequency(),
        interval in 0u32..24,
        date in date(),
    ) {
        let record = ExpenseRecord {
            recurring: true,
            recurring_type: Some(RecurringType::Custom),
            frequency: Some(frequency),
            interval: Some(interval),
            ..make_record(date)
        };

        let result = record.recurrence();
        if interval == 0 {
            prop_assert!(
                matches!(result, Err(ExpenseError::InvalidInterval)),
                "Zero interval should be rejected, got: {:?}",
                result
            );
        } else {
            prop_assert!(result.is_ok(), "got: {:?}", result);
        }
    }

    /// An end date is accepted exactly when it does not precede the
    /// expense date.
    #[test]
    fn prop_end_date_accepted_iff_not_before_expense(
        expense_date in date(),
        end_date in date(),
    ) {
        let record = ExpenseRecord {
            recurring: true,
            recurring_type: Some(RecurringType::Weekly),
            end_repeat: Some(EndRepeat::OnDate),
            end_date: Some(end_date),
            ..make_record(expense_date)
        };

        let result = record.recurrence();
        if end_date >= expense_date {
            prop_assert!(result.is_ok(), "got: {:?}", result);
        } else {
            prop_assert!(
                matches!(result, Err(ExpenseError::EndDateBeforeExpense { .. })),
                "Early end date should be rejected, got: {:?}",
                result
            );
        }
    }
}
