//! Budgets and per-category utilization for a selected month.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, category::Category, period::Period, transaction::TransactionKind};

/// A monthly spending cap for one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The opaque storage identifier of the budget row.
    pub id: String,
    /// The name of the category the cap applies to.
    pub category: String,
    /// The monthly cap.
    pub amount: Decimal,
    /// The month the cap applies to.
    pub month: Period,
    /// The spend cached by the storage layer.
    ///
    /// Never read here; utilization always recomputes spend from the
    /// transaction rollup.
    pub spent: Decimal,
}

/// How far through its cap a category is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Spend is at or below 80% of the cap.
    Good,
    /// Spend is above 80% but not above 100% of the cap.
    Warning,
    /// Spend exceeds the cap.
    Over,
}

impl BudgetStatus {
    /// Classify a raw utilization percentage.
    ///
    /// The thresholds are fixed design constants and the comparisons are
    /// strict: exactly 100% is still `Warning`, exactly 80% is still
    /// `Good`.
    fn from_percentage(percentage: Decimal) -> Self {
        if percentage > Decimal::ONE_HUNDRED {
            Self::Over
        } else if percentage > Decimal::from(80) {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Utilization of one expense category against its budget cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUtilization {
    /// The category name.
    pub category: String,
    /// The budget cap; zero when no budget row matches the category.
    pub budget: Decimal,
    /// The spend recomputed from the transaction rollup.
    pub spent: Decimal,
    /// `budget - spent`, clamped at zero.
    pub remaining: Decimal,
    /// Raw utilization percentage; may exceed 100.
    pub percentage: Decimal,
    /// `percentage` clamped to 100 for progress-bar rendering; the raw
    /// value is still what the numeric readout shows.
    pub display_percentage: Decimal,
    /// The status tier derived from the raw percentage.
    pub status: BudgetStatus,
}

/// Compute utilization for every expense category in `categories`.
///
/// `budgets` holds the rows for the selected month; when duplicate rows
/// exist for a category, the first match wins. `rollup` is the expense
/// rollup for the same month, see
/// [`rollup_by_category`](crate::rollup_by_category).
///
/// Spend rolled up under a name missing from the expense-category list
/// cannot be reconciled against any cap; it is reported with a warning and
/// otherwise left out, since the official category list drives the output.
pub fn budget_utilization(
    categories: &[Category],
    budgets: &[Budget],
    rollup: &HashMap<String, Decimal>,
) -> Vec<BudgetUtilization> {
    let expense_categories: Vec<&Category> = categories
        .iter()
        .filter(|category| category.kind == TransactionKind::Expense)
        .collect();

    for name in rollup.keys() {
        if !expense_categories
            .iter()
            .any(|category| &category.name == name)
        {
            tracing::warn!("{}", Error::MissingCategory(name.clone()));
        }
    }

    expense_categories
        .into_iter()
        .map(|category| {
            let spent = rollup
                .get(&category.name)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let budget = budgets
                .iter()
                .find(|budget| budget.category == category.name)
                .map(|budget| budget.amount)
                .unwrap_or(Decimal::ZERO);

            let percentage = if budget > Decimal::ZERO {
                spent / budget * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };

            BudgetUtilization {
                category: category.name.clone(),
                budget,
                spent,
                remaining: (budget - spent).max(Decimal::ZERO),
                percentage,
                display_percentage: percentage.min(Decimal::ONE_HUNDRED),
                status: BudgetStatus::from_percentage(percentage),
            }
        })
        .collect()
}
