//! Spendsight snapshot inspector
//!
//! Loads a JSON snapshot of expenses and budgets, runs it through the
//! analytics engine, and prints every derived view.
//!
//! Usage: cargo run --bin inspect -- [snapshot.json]

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendsight_core::budget::{Budget, BudgetService, reconcile_spent};
use spendsight_core::expense::{Expense, ExpenseRecord};
use spendsight_core::query::{ExpenseFilter, ExpenseSortKey, QueryService, SortDirection, SortSpec};
use spendsight_core::trend::{Granularity, TrendService};
use spendsight_shared::AppConfig;
use spendsight_shared::types::PageRequest;

/// On-disk snapshot of a user's data, as exported from the store.
#[derive(Debug, Deserialize)]
struct Snapshot {
    /// Full expense history.
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
    /// Budgets with whatever spent figures the store last saved.
    #[serde(default)]
    budgets: Vec<Budget>,
    /// Expenses for the month being reconciled.
    #[serde(default)]
    monthly_expenses: Vec<ExpenseRecord>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inspect=debug,spendsight_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "snapshot.json".to_string());

    println!("Loading snapshot from {path}...");
    let raw = std::fs::read_to_string(&path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;

    let expenses = convert(snapshot.expenses);
    let monthly = convert(snapshot.monthly_expenses);
    println!(
        "Loaded {} expenses, {} budgets, {} expenses this month",
        expenses.len(),
        snapshot.budgets.len(),
        monthly.len()
    );

    // Refresh each budget's spent figure from this month's spending
    let totals = TrendService::spend_by_category(&monthly);
    let budgets = reconcile_spent(snapshot.budgets, &totals);

    print_overview(&budgets, &config);
    print_statuses(&budgets);
    print_breakdown(&expenses);
    print_monthly_trend(&expenses);
    print_expense_table(&expenses, &config);

    Ok(())
}

/// Converts wire records into domain expenses, skipping invalid ones.
fn convert(records: Vec<ExpenseRecord>) -> Vec<Expense> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            match Expense::try_from(record) {
                Ok(expense) => Some(expense),
                Err(e) => {
                    warn!(id = ?id, "Skipping invalid expense record: {e}");
                    None
                }
            }
        })
        .collect()
}

fn print_overview(budgets: &[Budget], config: &AppConfig) {
    let overview = BudgetService::overview(budgets);

    println!();
    println!("Budget overview ({}):", config.display.currency);
    println!("  Total budget: {}", overview.total_budget);
    println!("  Total spent:  {}", overview.total_spent);
    println!("  Remaining:    {}", overview.remaining);
    println!("  Spent:        {}%", overview.percentage_spent);
    println!(
        "  Statuses:     {} good / {} warning / {} over budget across {} budgets",
        overview.status_counts.good,
        overview.status_counts.warning,
        overview.status_counts.over_budget,
        overview.budget_count
    );
}

fn print_statuses(budgets: &[Budget]) {
    println!();
    println!("Budget statuses:");
    for budget in budgets {
        println!(
            "  {}: {} of {} ({})",
            budget.category,
            budget.spent,
            budget.budget_limit,
            budget.status()
        );
    }
}

fn print_breakdown(expenses: &[Expense]) {
    println!();
    println!("Spending by category:");
    for entry in TrendService::category_breakdown(expenses) {
        println!("  {}: {} ({}%)", entry.category, entry.amount, entry.percent);
    }
}

fn print_monthly_trend(expenses: &[Expense]) {
    let series = TrendService::bucketize(expenses, Granularity::Monthly);

    println!();
    println!("Monthly totals:");
    for bucket in &series.buckets {
        let total: Decimal = bucket.amounts.values().copied().sum();
        println!(
            "  {}: {} across {} categories",
            bucket.key,
            total,
            bucket.amounts.len()
        );
    }
}

fn print_expense_table(expenses: &[Expense], config: &AppConfig) {
    let page = PageRequest {
        page: 1,
        per_page: config.table.page_size,
    };
    let sort = SortSpec {
        key: ExpenseSortKey::Date,
        direction: SortDirection::Descending,
    };
    let response = QueryService::expenses(expenses, &ExpenseFilter::new(), Some(sort), &page);

    println!();
    println!("Latest expenses (page 1 of {}):", response.meta.total_pages);
    for expense in &response.data {
        println!(
            "  {}  {}  {} {}",
            expense.date, expense.category, expense.amount, expense.currency
        );
    }
}
