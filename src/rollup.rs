//! Category rollups: transaction amounts summed by category name.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    period::Period,
    transaction::{Transaction, TransactionKind},
};

/// Sum transaction amounts by category name for one kind and period.
///
/// Categories with no matching transactions contribute no entry rather
/// than a zero entry; callers that need zero-filling cross-reference the
/// full category list themselves, as budget utilization does. The result
/// is independent of input order.
pub fn rollup_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
    period: Period,
) -> HashMap<String, Decimal> {
    let mut totals = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| t.kind == kind && period.contains(t.date))
    {
        *totals
            .entry(transaction.category.clone())
            .or_insert(Decimal::ZERO) += transaction.amount;
    }

    totals
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Date, macros::date};

    use crate::{
        period::Period,
        rollup::rollup_by_category,
        transaction::{Transaction, TransactionKind},
    };

    fn create_test_transaction(
        kind: TransactionKind,
        amount: i64,
        date: Date,
        category: &str,
    ) -> Transaction {
        Transaction {
            id: String::new(),
            date,
            description: String::new(),
            category: category.to_owned(),
            kind,
            amount: Decimal::from(amount),
        }
    }

    fn march() -> Period {
        "2025-03".parse().unwrap()
    }

    #[test]
    fn sums_amounts_by_category() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Expense, 100, date!(2025 - 03 - 15), "Food"),
            create_test_transaction(TransactionKind::Expense, 50, date!(2025 - 03 - 20), "Food"),
            create_test_transaction(
                TransactionKind::Expense,
                30,
                date!(2025 - 03 - 10),
                "Transport",
            ),
        ];

        let result = rollup_by_category(&transactions, TransactionKind::Expense, march());

        assert_eq!(result.len(), 2);
        assert_eq!(result["Food"], Decimal::from(150));
        assert_eq!(result["Transport"], Decimal::from(30));
    }

    #[test]
    fn filters_by_kind_and_period() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Income, 2000, date!(2025 - 03 - 01), "Salary"),
            create_test_transaction(TransactionKind::Expense, 100, date!(2025 - 02 - 15), "Food"),
            create_test_transaction(TransactionKind::Expense, 40, date!(2025 - 03 - 15), "Food"),
        ];

        let result = rollup_by_category(&transactions, TransactionKind::Expense, march());

        assert_eq!(result.len(), 1);
        assert_eq!(result["Food"], Decimal::from(40));
    }

    #[test]
    fn absent_categories_have_no_entry() {
        let transactions = vec![create_test_transaction(
            TransactionKind::Expense,
            100,
            date!(2025 - 03 - 15),
            "Food",
        )];

        let result = rollup_by_category(&transactions, TransactionKind::Expense, march());

        assert!(!result.contains_key("Transport"));
    }

    #[test]
    fn is_order_independent() {
        let mut transactions = vec![
            create_test_transaction(TransactionKind::Expense, 100, date!(2025 - 03 - 15), "Food"),
            create_test_transaction(
                TransactionKind::Expense,
                30,
                date!(2025 - 03 - 10),
                "Transport",
            ),
            create_test_transaction(TransactionKind::Expense, 50, date!(2025 - 03 - 20), "Food"),
        ];

        let forward = rollup_by_category(&transactions, TransactionKind::Expense, march());
        transactions.reverse();
        let backward = rollup_by_category(&transactions, TransactionKind::Expense, march());

        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        let result = rollup_by_category(&[], TransactionKind::Expense, march());

        assert!(result.is_empty());
    }
}
