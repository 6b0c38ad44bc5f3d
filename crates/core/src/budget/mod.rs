//! Budget status classification, totals, and spend reconciliation.

pub mod error;
pub mod reconcile;
pub mod service;
pub mod status;
pub mod types;


pub use error::BudgetError;
pub use reconcile::reconcile_spent;
pub use service::BudgetService;
pub use status::BudgetStatus;
pub use types::{Budget, BudgetComparisonChart, BudgetOverview, CreateBudgetInput, StatusCounts};
