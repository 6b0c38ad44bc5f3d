//! Filtering, sorting, and pagination for table views.

pub mod filter;
pub mod paginate;
pub mod service;
pub mod sort;


pub use filter::{BudgetFilter, ExpenseFilter};
pub use paginate::paginate;
pub use service::QueryService;
pub use sort::{BudgetSortKey, ExpenseSortKey, SortDirection, SortSpec};
