//! Summary statistics for a list of transactions.

use std::{collections::HashSet, fmt::Display};

use serde::Serialize;

use crate::transaction::{Transaction, round_to_cents};

/// Totals shown above the transaction list.
///
/// Monetary values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Income minus expenses.
    pub balance: f64,
    /// The sum of all positive amounts.
    pub income: f64,
    /// The magnitude of the sum of all negative amounts.
    pub expense: f64,
    /// The number of transactions.
    pub count: usize,
    /// The number of distinct categories.
    pub category_count: usize,
}

/// Summarize `transactions`.
///
/// An empty list gives a summary of all zeros.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut balance = 0.0;
    let mut income = 0.0;
    let mut expenses = 0.0;
    let mut categories = HashSet::new();

    for transaction in transactions {
        balance += transaction.amount;

        if transaction.is_income() {
            income += transaction.amount;
        } else if transaction.is_expense() {
            expenses += transaction.amount;
        }

        categories.insert(transaction.category);
    }

    Summary {
        balance: round_to_cents(balance),
        income: round_to_cents(income),
        expense: round_to_cents(f64::abs(expenses)),
        count: transactions.len(),
        category_count: categories.len(),
    }
}

/// How many transactions are shown out of how many exist, e.g. "12 total • showing 3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    /// The number of transactions in the ledger.
    pub total: usize,
    /// The number of transactions matching the filters.
    pub shown: usize,
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} total • showing {}", self.total, self.shown)
    }
}
