//! Analytics engine for Spendsight.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here. Every function
//! is total: degenerate inputs produce empty or zero outputs, never panics, and
//! nothing here touches a clock, RNG, or I/O.
//!
//! # Modules
//!
//! - `expense` - Expense records, recurrence descriptors, and submission rules
//! - `budget` - Budget status classification, totals, and spend reconciliation
//! - `trend` - Time-bucketed spending series and category breakdowns
//! - `query` - Filter / sort / paginate pipeline for table views

pub mod budget;
pub mod expense;
pub mod query;
pub mod trend;
