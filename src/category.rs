//! The category model: a named label that transactions reference by name.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

/// A label for grouping transactions, e.g. `"Food"` or `"Salary"`.
///
/// The engine treats the name as an opaque key matched against
/// [`Transaction::category`](crate::Transaction::category); icon and color
/// exist only so the presentation layer can decorate the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The opaque storage identifier of the category.
    pub id: String,
    /// The unique category name.
    pub name: String,
    /// Whether transactions under this category are income or expenses.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The icon the presentation layer shows for this category.
    pub icon: String,
    /// The display color of the category.
    pub color: String,
}
