//! Spending trend data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time bucket width for spending series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per Sunday-based week of the year.
    Weekly,
    /// One bucket per calendar month.
    Monthly,
    /// One bucket per calendar year.
    Yearly,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown granularity: {s}")),
        }
    }
}

/// Spending per category within one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Bucket key, e.g. `2025-03-07`, `2025-W10`, `2025-03`, `2025`.
    pub key: String,
    /// Summed spend for each category present in this bucket.
    pub amounts: BTreeMap<String, Decimal>,
}

/// Time-bucketed spending series.
///
/// Buckets ascend lexicographically by key and cover only keys with at
/// least one expense; a category absent from a bucket implicitly
/// contributes zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Bucket width the series was built with.
    pub granularity: Granularity,
    /// The buckets, ascending by key.
    pub buckets: Vec<TimeBucket>,
}

/// One category's label-aligned amounts for a trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeries {
    /// Category name.
    pub category: String,
    /// One amount per chart label, zero where the category has no spend
    /// in that bucket.
    pub amounts: Vec<Decimal>,
}

/// Chart-ready spending trend with zero-filled series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendChart {
    /// Bucket keys, ascending.
    pub labels: Vec<String>,
    /// One series per category, ascending by category name.
    pub series: Vec<CategorySeries>,
}

/// A category's total and share of all spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category name.
    pub category: String,
    /// Summed spend for the category.
    pub amount: Decimal,
    /// Share of the grand total as a percentage, rounded to 2 decimal
    /// places; zero when there is no spend at all.
    pub percent: Decimal,
}
