//! Spending trends over time and category share views.

pub mod bucket;
pub mod service;
pub mod types;


pub use bucket::{bucket_key, week_number};
pub use service::TrendService;
pub use types::{
    CategoryBreakdown, CategorySeries, Granularity, TimeBucket, TimeSeries, TrendChart,
};
