//! Multi-month income/expense trend series.

use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;

use crate::{
    period::Period,
    transaction::{Transaction, TransactionKind},
};

/// How many trailing months a trend series covers, counting the month that
/// contains "today".
pub const TREND_WINDOW_MONTHS: usize = 6;

/// Income, expense, and net totals for one month of a trend window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    /// The month the totals cover.
    pub period: Period,
    /// Total income in the month.
    pub income: Decimal,
    /// Total expenses in the month.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub net: Decimal,
}

/// Build the trailing [`TREND_WINDOW_MONTHS`]-month series ending at the
/// month containing `today`, oldest first.
///
/// The window is generated from the calendar, not from the data: months
/// with no transactions still appear with zero totals, so a chart shows
/// the gap instead of skipping the month.
pub fn monthly_trends(transactions: &[Transaction], today: Date) -> Vec<MonthlyTrend> {
    trends_for_months(
        transactions,
        &Period::trailing_months(today, TREND_WINDOW_MONTHS),
    )
}

/// Build a trend entry for each period in `months`, in the order given.
pub fn trends_for_months(transactions: &[Transaction], months: &[Period]) -> Vec<MonthlyTrend> {
    months
        .iter()
        .map(|&period| {
            let mut income = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;

            for transaction in transactions.iter().filter(|t| period.contains(t.date)) {
                match transaction.kind {
                    TransactionKind::Income => income += transaction.amount,
                    TransactionKind::Expense => expenses += transaction.amount,
                }
            }

            MonthlyTrend {
                period,
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Date, Month, macros::date};

    use crate::{
        period::Period,
        transaction::{Transaction, TransactionKind},
        trend::{TREND_WINDOW_MONTHS, monthly_trends},
    };

    fn create_test_transaction(kind: TransactionKind, amount: i64, date: Date) -> Transaction {
        Transaction {
            id: String::new(),
            date,
            description: String::new(),
            category: "Food".to_owned(),
            kind,
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn empty_collection_still_fills_the_window() {
        let result = monthly_trends(&[], date!(2025 - 03 - 14));

        assert_eq!(result.len(), TREND_WINDOW_MONTHS);

        for entry in &result {
            assert_eq!(entry.income, Decimal::ZERO);
            assert_eq!(entry.expenses, Decimal::ZERO);
            assert_eq!(entry.net, Decimal::ZERO);
        }
    }

    #[test]
    fn window_is_oldest_first_and_ends_at_the_current_month() {
        let result = monthly_trends(&[], date!(2025 - 03 - 14));

        assert_eq!(result[0].period, Period::new(2024, Month::October));
        assert_eq!(result[5].period, Period::new(2025, Month::March));
    }

    #[test]
    fn sums_income_and_expenses_per_month() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Income, 2000, date!(2025 - 02 - 01)),
            create_test_transaction(TransactionKind::Expense, 700, date!(2025 - 02 - 10)),
            create_test_transaction(TransactionKind::Expense, 300, date!(2025 - 03 - 05)),
        ];

        let result = monthly_trends(&transactions, date!(2025 - 03 - 14));

        let february = &result[4];
        assert_eq!(february.period, Period::new(2025, Month::February));
        assert_eq!(february.income, Decimal::from(2000));
        assert_eq!(february.expenses, Decimal::from(700));
        assert_eq!(february.net, Decimal::from(1300));

        let march = &result[5];
        assert_eq!(march.income, Decimal::ZERO);
        assert_eq!(march.expenses, Decimal::from(300));
        assert_eq!(march.net, Decimal::from(-300));
    }

    #[test]
    fn transactions_outside_the_window_are_ignored() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Expense, 999, date!(2024 - 09 - 30)),
            create_test_transaction(TransactionKind::Income, 999, date!(2025 - 04 - 01)),
        ];

        let result = monthly_trends(&transactions, date!(2025 - 03 - 14));

        for entry in &result {
            assert_eq!(entry.income, Decimal::ZERO);
            assert_eq!(entry.expenses, Decimal::ZERO);
        }
    }

    #[test]
    fn gap_months_between_data_stay_at_zero() {
        let transactions = vec![
            create_test_transaction(TransactionKind::Expense, 100, date!(2024 - 11 - 15)),
            create_test_transaction(TransactionKind::Expense, 200, date!(2025 - 01 - 15)),
        ];

        let result = monthly_trends(&transactions, date!(2025 - 03 - 14));

        assert_eq!(result[1].expenses, Decimal::from(100));
        assert_eq!(result[2].expenses, Decimal::ZERO);
        assert_eq!(result[3].expenses, Decimal::from(200));
    }
}
