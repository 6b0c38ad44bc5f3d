//! Query service composing the filter, sort, and paginate stages.

use spendsight_shared::types::{PageRequest, PageResponse};

use crate::budget::Budget;
use crate::expense::Expense;

use super::filter::{BudgetFilter, ExpenseFilter};
use super::paginate::paginate;
use super::sort::{BudgetSortKey, ExpenseSortKey, SortSpec};

/// Query service for business logic.
pub struct QueryService;

impl QueryService {
    /// One page of expenses after filtering and sorting.
    ///
    /// Sorting is stable, so rows that compare equal keep their input
    /// order; `sort: None` keeps the whole input order.
    #[must_use]
    pub fn expenses(
        expenses: &[Expense],
        filter: &ExpenseFilter,
        sort: Option<SortSpec<ExpenseSortKey>>,
        page: &PageRequest,
    ) -> PageResponse<Expense> {
        let mut rows: Vec<Expense> = expenses
            .iter()
            .filter(|expense| filter.matches(expense))
            .cloned()
            .collect();

        if let Some(spec) = sort {
            rows.sort_by(|a, b| spec.direction.apply(spec.key.compare(a, b)));
        }

        paginate(rows, page)
    }

    /// One page of budgets after filtering and sorting.
    #[must_use]
    pub fn budgets(
        budgets: &[Budget],
        filter: &BudgetFilter,
        sort: Option<SortSpec<BudgetSortKey>>,
        page: &PageRequest,
    ) -> PageResponse<Budget> {
        let mut rows: Vec<Budget> = budgets
            .iter()
            .filter(|budget| filter.matches(budget))
            .cloned()
            .collect();

        if let Some(spec) = sort {
            rows.sort_by(|a, b| spec.direction.apply(spec.key.compare(a, b)));
        }

        paginate(rows, page)
    }
}
