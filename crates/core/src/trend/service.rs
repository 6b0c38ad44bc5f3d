//! Trend service for time-bucketed series and category views.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::expense::Expense;

use super::bucket::bucket_key;
use super::types::{
    CategoryBreakdown, CategorySeries, Granularity, TimeBucket, TimeSeries, TrendChart,
};

/// Trend service for business logic.
pub struct TrendService;

impl TrendService {
    /// Groups expenses into time buckets with per-category sums.
    ///
    /// The bucket set is the union of keys across all categories,
    /// ascending by key; no expenses means no buckets.
    #[must_use]
    pub fn bucketize(expenses: &[Expense], granularity: Granularity) -> TimeSeries {
        let mut buckets: BTreeMap<String, BTreeMap<String, Decimal>> = BTreeMap::new();

        for expense in expenses {
            let key = bucket_key(expense.date, granularity);
            let total = buckets
                .entry(key)
                .or_default()
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO);
            *total += expense.amount;
        }

        TimeSeries {
            granularity,
            buckets: buckets
                .into_iter()
                .map(|(key, amounts)| TimeBucket { key, amounts })
                .collect(),
        }
    }

    /// Total spend per category across all expenses.
    ///
    /// This is the same shape the monthly reconciliation consumes, so
    /// feeding a month's expenses through here yields the aggregates for
    /// [`crate::budget::reconcile_spent`].
    #[must_use]
    pub fn spend_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();

        for expense in expenses {
            let total = totals
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO);
            *total += expense.amount;
        }

        totals
    }

    /// Zero-filled chart series from a bucketized series.
    ///
    /// Labels are the bucket keys in order. Every category appearing
    /// anywhere in the series gets one amount per label, zero where it
    /// has no spend in that bucket, so all series have the same length.
    #[must_use]
    pub fn trend_chart(series: &TimeSeries) -> TrendChart {
        let labels: Vec<String> = series
            .buckets
            .iter()
            .map(|bucket| bucket.key.clone())
            .collect();

        let categories: BTreeSet<&String> = series
            .buckets
            .iter()
            .flat_map(|bucket| bucket.amounts.keys())
            .collect();

        let rows = categories
            .into_iter()
            .map(|category| CategorySeries {
                category: category.clone(),
                amounts: series
                    .buckets
                    .iter()
                    .map(|bucket| {
                        bucket
                            .amounts
                            .get(category)
                            .copied()
                            .unwrap_or(Decimal::ZERO)
                    })
                    .collect(),
            })
            .collect();

        TrendChart {
            labels,
            series: rows,
        }
    }

    /// Each category's total and share of all spending, largest first.
    ///
    /// Ties on amount order by category name so the output is
    /// deterministic.
    #[must_use]
    pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryBreakdown> {
        let totals = Self::spend_by_category(expenses);
        let grand_total: Decimal = totals.values().copied().sum();

        let mut breakdown: Vec<CategoryBreakdown> = totals
            .into_iter()
            .map(|(category, amount)| {
                let percent = if grand_total.is_zero() {
                    Decimal::ZERO
                } else {
                    (amount / grand_total * Decimal::ONE_HUNDRED).round_dp(2)
                };
                CategoryBreakdown {
                    category,
                    amount,
                    percent,
                }
            })
            .collect();

        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        breakdown
    }
}
