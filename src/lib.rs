//! Satang is the aggregation core of a personal income/expense tracker.
//!
//! Everything in this crate is a pure, synchronous transform: the storage
//! and transport collaborators hand over read-only snapshots of
//! transactions, categories, budgets, goals, and tax parameters, and the
//! functions here derive the figures a dashboard displays: running
//! balances, per-category budget utilization, multi-month trend series,
//! goal progress, and an illustrative income-tax estimate. Same snapshot
//! in, same result out; there is no I/O, no shared state, and nothing to
//! lock.
//!
//! Malformed rows that slip past the storage layer's validation are
//! skipped or zero-defaulted with a log entry rather than failing the
//! whole aggregation, so the dashboard stays usable. The ambient "today"
//! is always an explicit parameter, never read from the wall clock.

#![warn(missing_docs)]

mod budget;
mod category;
mod error;
mod goal;
mod ledger;
mod money;
mod period;
mod record;
mod rollup;
mod tax;
mod transaction;
mod trend;

pub use budget::{Budget, BudgetStatus, BudgetUtilization, budget_utilization};
pub use category::Category;
pub use error::Error;
pub use goal::{
    Goal, GoalProgress, TimeRemaining, goal_progress, progress_percentage, time_remaining,
};
pub use ledger::{MonthlyStats, RunningBalance, monthly_stats, running_balance};
pub use money::{format_amount, format_whole, parse_amount};
pub use period::Period;
pub use record::{
    BudgetRecord, CategoryRecord, GoalRecord, TransactionRecord, budgets_from_records,
    categories_from_records, goals_from_records, parse_date, transactions_from_records,
};
pub use rollup::rollup_by_category;
pub use tax::{
    BracketTax, Deductions, MonthlyAverage, TaxBracket, TaxParameters, TaxSummary, estimate_tax,
};
pub use transaction::{Transaction, TransactionKind};
pub use trend::{MonthlyTrend, TREND_WINDOW_MONTHS, monthly_trends, trends_for_months};
