//! Plain storage records and their conversion into engine types.
//!
//! The storage collaborator delivers decimal columns and dates as strings.
//! Conversion is lossy on purpose: a row whose amount or date fails
//! validation is skipped with a warning, so one malformed row cannot take
//! the whole dashboard down. Kind fields are validated upstream by the
//! storage schema and deserialize straight into [`TransactionKind`].

use rust_decimal::Decimal;
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    budget::Budget,
    category::Category,
    goal::Goal,
    money::parse_amount,
    period::Period,
    transaction::{Transaction, TransactionKind},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse an ISO `YYYY-MM-DD` calendar day.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `text` is not a valid ISO date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, &DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// A transaction row as the storage layer delivers it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    /// Opaque row identifier.
    pub id: String,
    /// ISO `YYYY-MM-DD` day.
    pub date: String,
    /// Free-text description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Whether the row is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Decimal amount, e.g. `"1234.50"`.
    pub amount: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = Error;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_date(&record.date)?,
            amount: parse_amount(&record.amount)?,
            id: record.id,
            description: record.description,
            category: record.category,
            kind: record.kind,
        })
    }
}

/// A budget row as the storage layer delivers it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetRecord {
    /// Opaque row identifier.
    pub id: String,
    /// Category name the cap applies to.
    pub category: String,
    /// Decimal monthly cap.
    pub amount: String,
    /// `YYYY-MM` month key.
    pub month: String,
    /// Decimal cached spend.
    pub spent: String,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = Error;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        // The cached spend is advisory and never trusted; a bad value
        // degrades to zero rather than dropping the row.
        let spent = parse_amount(&record.spent).unwrap_or_else(|error| {
            tracing::debug!("ignoring cached budget spend: {error}");
            Decimal::ZERO
        });

        Ok(Self {
            month: record.month.parse::<Period>()?,
            amount: parse_amount(&record.amount)?,
            id: record.id,
            category: record.category,
            spent,
        })
    }
}

/// A goal row as the storage layer delivers it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    /// Opaque row identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Decimal target amount.
    pub target_amount: String,
    /// Decimal amount saved so far.
    pub current_amount: String,
    /// Optional ISO `YYYY-MM-DD` deadline; empty counts as unset.
    pub deadline: Option<String>,
    /// Display icon.
    pub icon: String,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = Error;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        let deadline = match record.deadline.as_deref() {
            None | Some("") => None,
            Some(text) => Some(parse_date(text)?),
        };

        Ok(Self {
            target_amount: parse_amount(&record.target_amount)?,
            current_amount: parse_amount(&record.current_amount)?,
            id: record.id,
            title: record.title,
            deadline,
            icon: record.icon,
        })
    }
}

/// A category row as the storage layer delivers it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRecord {
    /// Opaque row identifier.
    pub id: String,
    /// Unique category name.
    pub name: String,
    /// Whether the category's transactions are income or expenses.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Display icon.
    pub icon: String,
    /// Display color.
    pub color: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            kind: record.kind,
            icon: record.icon,
            color: record.color,
        }
    }
}

/// Convert transaction rows into engine transactions, skipping rows that
/// fail validation.
pub fn transactions_from_records(records: Vec<TransactionRecord>) -> Vec<Transaction> {
    records
        .into_iter()
        .filter_map(|record| match Transaction::try_from(record) {
            Ok(transaction) => Some(transaction),
            Err(error) => {
                tracing::warn!("skipping transaction row: {error}");
                None
            }
        })
        .collect()
}

/// Convert budget rows into engine budgets, skipping rows that fail
/// validation.
pub fn budgets_from_records(records: Vec<BudgetRecord>) -> Vec<Budget> {
    records
        .into_iter()
        .filter_map(|record| match Budget::try_from(record) {
            Ok(budget) => Some(budget),
            Err(error) => {
                tracing::warn!("skipping budget row: {error}");
                None
            }
        })
        .collect()
}

/// Convert goal rows into engine goals, skipping rows that fail
/// validation.
pub fn goals_from_records(records: Vec<GoalRecord>) -> Vec<Goal> {
    records
        .into_iter()
        .filter_map(|record| match Goal::try_from(record) {
            Ok(goal) => Some(goal),
            Err(error) => {
                tracing::warn!("skipping goal row: {error}");
                None
            }
        })
        .collect()
}

/// Convert category rows into engine categories.
pub fn categories_from_records(records: Vec<CategoryRecord>) -> Vec<Category> {
    records.into_iter().map(Category::from).collect()
}
