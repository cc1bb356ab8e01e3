//! Transaction data aggregation for charts.
//!
//! Provides functions to total expenses by category and to bucket income and
//! expenses into a fixed window of calendar months.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    category::Category,
    format::format_month_label,
    month::YearMonth,
    transaction::{Transaction, round_to_cents},
};

/// The total spent in one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category the expenses were filed under.
    pub category: Category,
    /// The magnitude of all expenses in the category, always positive.
    pub total: f64,
}

/// Expense totals per category, in the order each category first appears.
///
/// Totals are kept unrounded so that repeated aggregation does not compound
/// rounding error. Use [CategoryTotals::rounded] when handing them to a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    /// The total spent in `category`, or `None` if nothing was spent there.
    pub fn get(&self, category: Category) -> Option<f64> {
        self.0
            .iter()
            .find(|total| total.category == category)
            .map(|total| total.total)
    }

    /// Whether there were no expenses at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of categories with expenses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The totals in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    /// The totals rounded to two decimal places, for display.
    pub fn rounded(&self) -> Vec<CategoryTotal> {
        self.0
            .iter()
            .map(|total| CategoryTotal {
                category: total.category,
                total: round_to_cents(total.total),
            })
            .collect()
    }
}

/// Totals the magnitude of expenses in each category.
///
/// Income is ignored, and categories without any expenses are left out.
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let amount = transaction.amount.abs();

        match totals
            .iter_mut()
            .find(|total| total.category == transaction.category)
        {
            Some(total) => total.total += amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: amount,
            }),
        }
    }

    CategoryTotals(totals)
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    /// The month as `YYYY-MM`.
    pub key: String,
    /// The month for display, e.g. "Jan 2024".
    pub label: String,
    /// The sum of positive amounts in the month.
    pub income: f64,
    /// The magnitude of the sum of negative amounts in the month.
    pub expense: f64,
}

/// The number of months shown in the monthly trend by default.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Buckets income and expenses into the `window_months` calendar months
/// ending with the month of `anchor`, oldest first.
///
/// Every month in the window gets a bucket, even if it has no transactions.
/// Transactions outside the window are ignored.
pub fn monthly_series(
    transactions: &[Transaction],
    window_months: u32,
    anchor: Date,
) -> Vec<MonthBucket> {
    let months = YearMonth::of(anchor).trailing_window(window_months);

    let mut buckets: Vec<MonthBucket> = months
        .iter()
        .map(|&month| MonthBucket {
            key: month.to_string(),
            label: format_month_label(month),
            income: 0.0,
            expense: 0.0,
        })
        .collect();

    let bucket_index: HashMap<YearMonth, usize> = months
        .into_iter()
        .enumerate()
        .map(|(index, month)| (month, index))
        .collect();

    for transaction in transactions {
        let Some(&index) = bucket_index.get(&YearMonth::of(transaction.date)) else {
            continue;
        };

        let bucket = &mut buckets[index];
        if transaction.is_income() {
            bucket.income += transaction.amount;
        } else {
            bucket.expense += transaction.amount.abs();
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        dashboard::{CategoryTotal, category_totals, monthly_series},
        transaction::{Transaction, TransactionId},
    };

    fn create_test_transaction(amount: f64, date: time::Date, category: Category) -> Transaction {
        Transaction {
            id: TransactionId::generate(),
            description: "test".to_owned(),
            amount,
            category,
            date,
        }
    }

    #[test]
    fn category_totals_ignore_income() {
        let transactions = vec![
            create_test_transaction(100.0, date!(2024 - 01 - 15), Category::Salary),
            create_test_transaction(-40.0, date!(2024 - 01 - 20), Category::Food),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(Category::Food), Some(40.0));
        assert_eq!(totals.get(Category::Salary), None);
    }

    #[test]
    fn category_totals_sum_magnitudes_per_category() {
        let transactions = vec![
            create_test_transaction(-10.0, date!(2024 - 01 - 01), Category::Food),
            create_test_transaction(-5.5, date!(2024 - 01 - 02), Category::Transport),
            create_test_transaction(-2.25, date!(2024 - 01 - 03), Category::Food),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.get(Category::Food), Some(12.25));
        assert_eq!(totals.get(Category::Transport), Some(5.5));
        assert!(totals.iter().all(|total| total.total >= 0.0));
    }

    #[test]
    fn category_totals_keep_first_seen_order() {
        let transactions = vec![
            create_test_transaction(-1.0, date!(2024 - 01 - 01), Category::Transport),
            create_test_transaction(-1.0, date!(2024 - 01 - 02), Category::Food),
            create_test_transaction(-1.0, date!(2024 - 01 - 03), Category::Transport),
        ];

        let order: Vec<Category> = category_totals(&transactions)
            .iter()
            .map(|total| total.category)
            .collect();

        assert_eq!(order, vec![Category::Transport, Category::Food]);
    }

    #[test]
    fn category_totals_of_no_expenses_is_empty() {
        let transactions = vec![create_test_transaction(
            100.0,
            date!(2024 - 01 - 15),
            Category::Salary,
        )];

        assert!(category_totals(&transactions).is_empty());
    }

    #[test]
    fn rounded_category_totals_round_to_cents() {
        let transactions = vec![
            create_test_transaction(-0.1, date!(2024 - 01 - 01), Category::Food),
            create_test_transaction(-0.2, date!(2024 - 01 - 02), Category::Food),
        ];

        assert_eq!(
            category_totals(&transactions).rounded(),
            vec![CategoryTotal {
                category: Category::Food,
                total: 0.3,
            }]
        );
    }

    #[test]
    fn monthly_series_has_fixed_size_for_empty_input() {
        let series = monthly_series(&[], 6, date!(2024 - 01 - 31));

        assert_eq!(series.len(), 6);
        assert!(
            series
                .iter()
                .all(|bucket| bucket.income == 0.0 && bucket.expense == 0.0)
        );
    }

    #[test]
    fn monthly_series_buckets_across_year_boundary() {
        let transactions = vec![
            create_test_transaction(200.0, date!(2023 - 11 - 03), Category::Salary),
            create_test_transaction(-25.0, date!(2023 - 11 - 28), Category::Food),
            create_test_transaction(100.0, date!(2024 - 01 - 15), Category::Salary),
            create_test_transaction(-40.0, date!(2024 - 01 - 20), Category::Food),
        ];

        let series = monthly_series(&transactions, 3, date!(2024 - 01 - 31));

        let keys: Vec<&str> = series.iter().map(|bucket| bucket.key.as_str()).collect();
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01"]);

        assert_eq!(series[0].income, 200.0);
        assert_eq!(series[0].expense, 25.0);
        assert_eq!(series[1].income, 0.0);
        assert_eq!(series[1].expense, 0.0);
        assert_eq!(series[2].income, 100.0);
        assert_eq!(series[2].expense, 40.0);
    }

    #[test]
    fn monthly_series_labels_months() {
        let series = monthly_series(&[], 2, date!(2024 - 01 - 01));

        let labels: Vec<&str> = series.iter().map(|bucket| bucket.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2023", "Jan 2024"]);
    }

    #[test]
    fn monthly_series_excludes_transactions_outside_window() {
        let transactions = vec![
            create_test_transaction(500.0, date!(2023 - 10 - 31), Category::Salary),
            create_test_transaction(-60.0, date!(2024 - 02 - 01), Category::Bills),
            create_test_transaction(-5.0, date!(2023 - 12 - 01), Category::Food),
        ];

        let series = monthly_series(&transactions, 3, date!(2024 - 01 - 15));

        let total_income: f64 = series.iter().map(|bucket| bucket.income).sum();
        let total_expense: f64 = series.iter().map(|bucket| bucket.expense).sum();
        assert_eq!(total_income, 0.0);
        assert_eq!(total_expense, 5.0);
    }

    #[test]
    fn monthly_series_with_zero_window_is_empty() {
        assert!(monthly_series(&[], 0, date!(2024 - 01 - 15)).is_empty());
    }
}
