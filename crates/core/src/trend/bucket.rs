//! Bucket key computation.

use chrono::{Datelike, NaiveDate};

use super::types::Granularity;

/// Week number of a date within its year.
///
/// Weeks are Sunday-based and week 1 begins on January 1, so the first
/// week is usually partial: with `days_elapsed` the 0-indexed day of year
/// and `jan1_weekday` the weekday index of January 1 (Sunday = 0), the
/// week is `ceil((days_elapsed + jan1_weekday + 1) / 7)`. This is not the
/// ISO 8601 week: 2025-01-01 (a Wednesday) is week 1, and the first
/// Sunday of 2025 starts week 2.
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    // Jan 1 of the same year; the fallback is unreachable for any date
    // chrono can represent.
    let jan1 = date.with_ordinal0(0).unwrap_or(date);

    let days_elapsed = date.ordinal0();
    let jan1_weekday = jan1.weekday().num_days_from_sunday();

    (days_elapsed + jan1_weekday + 1).div_ceil(7)
}

/// The bucket key for a date at the given granularity.
///
/// Daily keys are ISO dates, weekly keys are `YYYY-W{n}` with an unpadded
/// week number, monthly keys are `YYYY-MM`, yearly keys are `YYYY`. Chart
/// labels sort these keys lexicographically, which interleaves
/// double-digit weeks within a year.
#[must_use]
pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily => date.format("%Y-%m-%d").to_string(),
        Granularity::Weekly => format!("{}-W{}", date.year(), week_number(date)),
        Granularity::Monthly => format!("{}-{:02}", date.year(), date.month()),
        Granularity::Yearly => date.year().to_string(),
    }
}
