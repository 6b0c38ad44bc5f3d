//! Single-column sorting for table views.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::expense::Expense;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A sort key together with its direction.
///
/// Models a clickable column header: selecting the active column again
/// flips the direction, selecting a different column starts over
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    /// Which column to sort by.
    pub key: K,
    /// Which way to sort it.
    pub direction: SortDirection,
}

impl<K> SortSpec<K> {
    /// Creates an ascending sort on the given key.
    #[must_use]
    pub const fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// The sort in effect after selecting `key`.
    #[must_use]
    pub fn toggle(self, key: K) -> Self
    where
        K: PartialEq,
    {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }
}

/// Sortable expense columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSortKey {
    /// Expense date.
    Date,
    /// Expense amount.
    Amount,
    /// Category name (case-sensitive).
    Category,
    /// Free-text description; expenses without one sort first.
    Description,
}

impl ExpenseSortKey {
    /// Ascending comparison of two expenses on this column.
    #[must_use]
    pub fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Category => a.category.cmp(&b.category),
            Self::Description => a.description.cmp(&b.description),
        }
    }
}

impl std::str::FromStr for ExpenseSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "description" => Ok(Self::Description),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

/// Sortable budget columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetSortKey {
    /// Category name (case-sensitive).
    Category,
    /// Monthly limit.
    BudgetLimit,
    /// Spend recorded against the budget.
    Spent,
}

impl BudgetSortKey {
    /// Ascending comparison of two budgets on this column.
    #[must_use]
    pub fn compare(self, a: &Budget, b: &Budget) -> Ordering {
        match self {
            Self::Category => a.category.cmp(&b.category),
            Self::BudgetLimit => a.budget_limit.cmp(&b.budget_limit),
            Self::Spent => a.spent.cmp(&b.spent),
        }
    }
}

impl std::str::FromStr for BudgetSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "budget_limit" => Ok(Self::BudgetLimit),
            "spent" => Ok(Self::Spent),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let spec = SortSpec::ascending(ExpenseSortKey::Date);

        let spec = spec.toggle(ExpenseSortKey::Date);
        assert_eq!(spec.direction, SortDirection::Descending);

        let spec = spec.toggle(ExpenseSortKey::Date);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_key_resets_to_ascending() {
        let spec = SortSpec::ascending(ExpenseSortKey::Date).toggle(ExpenseSortKey::Date);
        assert_eq!(spec.direction, SortDirection::Descending);

        let spec = spec.toggle(ExpenseSortKey::Amount);
        assert_eq!(spec.key, ExpenseSortKey::Amount);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn test_expense_key_from_str() {
        assert_eq!(
            ExpenseSortKey::from_str("amount").unwrap(),
            ExpenseSortKey::Amount
        );
        assert_eq!(
            ExpenseSortKey::from_str("Date").unwrap(),
            ExpenseSortKey::Date
        );
        assert!(ExpenseSortKey::from_str("vendor").is_err());
    }

    #[test]
    fn test_budget_key_from_str() {
        assert_eq!(
            BudgetSortKey::from_str("budget_limit").unwrap(),
            BudgetSortKey::BudgetLimit
        );
        assert!(BudgetSortKey::from_str("limit").is_err());
    }
}
