//! Monthly spend reconciliation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::Budget;

/// Applies current-month category totals to budgets.
///
/// `spend_by_category` maps category names to summed expense amounts for
/// the month, as produced by an external aggregate or by
/// `TrendService::spend_by_category` over the month's expenses. A budget
/// whose category has no entry reads as zero spent. Only configured
/// budget categories participate: spend in a category with no budget
/// never reaches a budget view, though trend and breakdown views still
/// see it. Output order follows input order.
#[must_use]
pub fn reconcile_spent(
    budgets: Vec<Budget>,
    spend_by_category: &BTreeMap<String, Decimal>,
) -> Vec<Budget> {
    budgets
        .into_iter()
        .map(|budget| {
            let spent = spend_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            Budget { spent, ..budget }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use spendsight_shared::types::BudgetId;

    fn make_budget(id: i64, category: &str, budget_limit: Decimal) -> Budget {
        Budget {
            id: BudgetId::from_raw(id),
            category: category.to_string(),
            budget_limit,
            spent: Decimal::ZERO,
        }
    }

    #[test]
    fn test_spent_comes_from_aggregates_or_zero() {
        let budgets = vec![
            make_budget(1, "Groceries", dec!(300)),
            make_budget(2, "Travel", dec!(150)),
        ];
        let mut aggregates = BTreeMap::new();
        aggregates.insert("Groceries".to_string(), dec!(120));

        let reconciled = reconcile_spent(budgets, &aggregates);

        assert_eq!(reconciled[0].spent, dec!(120));
        assert_eq!(reconciled[1].spent, dec!(0));
    }

    #[test]
    fn test_unbudgeted_spend_is_dropped() {
        let budgets = vec![make_budget(1, "Groceries", dec!(300))];
        let mut aggregates = BTreeMap::new();
        aggregates.insert("Groceries".to_string(), dec!(80));
        aggregates.insert("Gadgets".to_string(), dec!(999));

        let reconciled = reconcile_spent(budgets, &aggregates);

        assert_eq!(reconciled.len(), 1);
        assert_eq!(reconciled[0].category, "Groceries");
        assert_eq!(reconciled[0].spent, dec!(80));
    }

    #[test]
    fn test_stale_spent_is_overwritten() {
        let budget = Budget {
            spent: dec!(500),
            ..make_budget(1, "Groceries", dec!(300))
        };

        let reconciled = reconcile_spent(vec![budget], &BTreeMap::new());

        assert_eq!(reconciled[0].spent, dec!(0));
    }

    #[test]
    fn test_order_and_fields_preserved() {
        let budgets = vec![
            make_budget(3, "Travel", dec!(150)),
            make_budget(1, "Groceries", dec!(300)),
        ];

        let reconciled = reconcile_spent(budgets, &BTreeMap::new());

        assert_eq!(reconciled[0].id, BudgetId::from_raw(3));
        assert_eq!(reconciled[0].category, "Travel");
        assert_eq!(reconciled[0].budget_limit, dec!(150));
        assert_eq!(reconciled[1].category, "Groceries");
    }
}
