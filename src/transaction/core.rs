//! Defines the core data model for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::category::Category;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An opaque, unique identifier for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh, random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are never edited after they are created. To create a new
/// `Transaction` from user input, use [crate::TransactionForm::validate].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    #[serde(rename = "text")]
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Transaction {
    /// Whether money was earned in this transaction.
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Whether money was spent in this transaction.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Round `amount` to two decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        transaction::{Transaction, TransactionId, round_to_cents},
    };

    #[test]
    fn serializes_with_iso_dates_and_text_field() {
        let transaction = Transaction {
            id: TransactionId::from("abc123"),
            description: "Lunch".to_owned(),
            amount: -12.5,
            category: Category::Food,
            date: date!(2024 - 01 - 05),
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc123",
                "text": "Lunch",
                "amount": -12.5,
                "category": "Food",
                "date": "2024-01-05",
            })
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(TransactionId::generate(), TransactionId::generate());
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        assert_eq!(round_to_cents(1.236), 1.24);
        assert_eq!(round_to_cents(-3.333), -3.33);
        assert_eq!(round_to_cents(7.0), 7.0);
    }

    #[test]
    fn zero_amount_is_neither_income_nor_expense() {
        let transaction = Transaction {
            id: TransactionId::from("zero"),
            description: "Nothing".to_owned(),
            amount: 0.0,
            category: Category::Other,
            date: date!(2024 - 01 - 05),
        };

        assert!(!transaction.is_income());
        assert!(!transaction.is_expense());
    }
}
