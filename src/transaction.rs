//! The transaction model: a single dated income or expense entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// Whether a transaction adds to or subtracts from the ledger.
///
/// There is no third state; a record with any other kind never reaches the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in; added to the running balance.
    Income,
    /// Money going out; subtracted from the running balance.
    Expense,
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The opaque storage identifier of the transaction.
    pub id: String,
    /// The calendar day the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The name of the category the transaction belongs to, matched as an
    /// opaque string against the category list.
    pub category: String,
    /// Whether this entry is income or an expense.
    pub kind: TransactionKind,
    /// The magnitude of the transaction, always non-negative; the sign of
    /// its effect on the ledger is implied by `kind`.
    pub amount: Decimal,
}

impl Transaction {
    /// The amount with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
