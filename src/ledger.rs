//! Running ledger balances and per-month summary statistics.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    period::Period,
    rollup::rollup_by_category,
    transaction::{Transaction, TransactionKind},
};

/// The running balance after each transaction of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningBalance {
    /// The post-transaction balance for each input row, in input order.
    pub balances: Vec<Decimal>,
    /// The balance after the last transaction; zero for an empty input.
    pub total: Decimal,
}

/// Compute the running balance over `transactions` in the order given.
///
/// The caller owns ordering (typically chronological); this function is a
/// single pass and never sorts. `balances[i]` reflects exactly the net
/// effect of `transactions[0..=i]`.
pub fn running_balance(transactions: &[Transaction]) -> RunningBalance {
    let mut balance = Decimal::ZERO;
    let mut balances = Vec::with_capacity(transactions.len());

    for transaction in transactions {
        balance += transaction.signed_amount();
        balances.push(balance);
    }

    RunningBalance {
        balances,
        total: balance,
    }
}

/// Summary statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    /// Total income in the month.
    pub total_income: Decimal,
    /// Total expenses in the month.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub balance: Decimal,
    /// How many transactions fell inside the month.
    pub transaction_count: usize,
    /// Mean magnitude across the month's transactions of both kinds; zero
    /// when the month is empty.
    pub average_amount: Decimal,
    /// Share of income left over, as a percentage; zero when there is no
    /// income.
    pub savings_rate: Decimal,
    /// The month's expenses summed by category name.
    pub category_breakdown: HashMap<String, Decimal>,
}

/// Summarise `transactions` for the month identified by `period`.
pub fn monthly_stats(transactions: &[Transaction], period: Period) -> MonthlyStats {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut magnitude_sum = Decimal::ZERO;
    let mut count = 0usize;

    for transaction in transactions.iter().filter(|t| period.contains(t.date)) {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expenses += transaction.amount,
        }

        magnitude_sum += transaction.amount;
        count += 1;
    }

    let balance = total_income - total_expenses;

    let average_amount = if count > 0 {
        magnitude_sum / Decimal::from(count as u64)
    } else {
        Decimal::ZERO
    };

    let savings_rate = if total_income > Decimal::ZERO {
        balance / total_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    MonthlyStats {
        total_income,
        total_expenses,
        balance,
        transaction_count: count,
        average_amount,
        savings_rate,
        category_breakdown: rollup_by_category(transactions, TransactionKind::Expense, period),
    }
}


#[cfg(test)]
mod monthly_stats_tests {
    use rust_decimal::Decimal;
    use time::{Date, macros::date};

    use crate::{
        ledger::monthly_stats,
        period::Period,
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

    #[test]
    fn sums_only_the_selected_month() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Income, 2000, date!(2025 - 03 - 01), "Salary"),
            create_test_transaction(TransactionKind::Expense, 400, date!(2025 - 03 - 10), "Food"),
            create_test_transaction(TransactionKind::Expense, 100, date!(2025 - 03 - 20), "Food"),
            create_test_transaction(TransactionKind::Expense, 999, date!(2025 - 02 - 28), "Food"),
        ];

        let stats = monthly_stats(&transactions, "2025-03".parse::<Period>().unwrap());

        assert_eq!(stats.total_income, Decimal::from(2000));
        assert_eq!(stats.total_expenses, Decimal::from(500));
        assert_eq!(stats.balance, Decimal::from(1500));
        assert_eq!(stats.transaction_count, 3);
        assert_eq!(stats.category_breakdown["Food"], Decimal::from(500));
    }

    #[test]
    fn average_covers_both_kinds() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Income, 900, date!(2025 - 03 - 01), "Salary"),
            create_test_transaction(TransactionKind::Expense, 300, date!(2025 - 03 - 02), "Food"),
        ];

        let stats = monthly_stats(&transactions, "2025-03".parse::<Period>().unwrap());

        assert_eq!(stats.average_amount, Decimal::from(600));
    }

    #[test]
    fn savings_rate_is_share_of_income_kept() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Income, 1000, date!(2025 - 03 - 01), "Salary"),
            create_test_transaction(TransactionKind::Expense, 250, date!(2025 - 03 - 02), "Food"),
        ];

        let stats = monthly_stats(&transactions, "2025-03".parse::<Period>().unwrap());

        assert_eq!(stats.savings_rate, Decimal::from(75));
    }

    #[test]
    fn empty_month_yields_all_zeroes() {
        let stats = monthly_stats(&[], "2025-03".parse::<Period>().unwrap());

        assert_eq!(stats.total_income, Decimal::ZERO);
        assert_eq!(stats.total_expenses, Decimal::ZERO);
        assert_eq!(stats.balance, Decimal::ZERO);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.average_amount, Decimal::ZERO);
        assert_eq!(stats.savings_rate, Decimal::ZERO);
        assert!(stats.category_breakdown.is_empty());
    }

    #[test]
    fn expense_only_month_has_zero_savings_rate() {
        let transactions = vec![create_test_transaction(
            TransactionKind::Expense,
            100,
            date!(2025 - 03 - 05),
            "Food",
        )];

        let stats = monthly_stats(&transactions, "2025-03".parse::<Period>().unwrap());

        assert_eq!(stats.savings_rate, Decimal::ZERO);
        assert_eq!(stats.balance, Decimal::from(-100));
    }
}
