//! Validation of user input for creating new transactions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    category::Category,
    transaction::core::{Transaction, TransactionId, round_to_cents},
};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Whether the user is recording money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, stored as a positive amount.
    Income,
    /// Money spent, stored as a negative amount.
    Expense,
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(Error::InvalidTransactionKind(other.to_owned())),
        }
    }
}

/// The raw, unvalidated fields a user submits to record a transaction.
///
/// The amount is entered as a magnitude; its sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The amount as typed by the user.
    pub amount: String,
    /// Whether the amount was earned or spent.
    pub kind: TransactionKind,
    /// The category to file the transaction under.
    pub category: Category,
    /// The date as typed by the user, e.g. "2024-01-15".
    pub date: String,
}

impl TransactionForm {
    /// Check the form and normalize its fields.
    ///
    /// The description is trimmed, the amount is given the sign of `kind`
    /// and rounded to two decimal places.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if the description is blank,
    /// - [Error::InvalidAmount] if the amount is not a finite, non-zero number,
    /// - [Error::MissingDate] if the date is blank,
    /// - or [Error::InvalidDate] if the date is not a valid `YYYY-MM-DD` date.
    pub fn validate(self) -> Result<ValidatedTransaction, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let amount = parse_amount(&self.amount)?;
        let amount = match self.kind {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        };

        let date = parse_date(&self.date)?;

        Ok(ValidatedTransaction {
            description: description.to_owned(),
            amount,
            category: self.category,
            date,
        })
    }
}

/// A transaction whose fields have passed validation, but which has not been
/// assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    description: String,
    amount: f64,
    category: Category,
    date: Date,
}

impl ValidatedTransaction {
    /// The signed, rounded amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The trimmed description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Assign `id` and produce the final transaction.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// Parse a positive magnitude rounded to cents.
///
/// A leading minus sign is ignored, the sign is decided by the transaction kind.
fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    let amount: f64 = text
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(text.to_owned()));
    }

    let amount = round_to_cents(amount.abs());
    if amount == 0.0 {
        return Err(Error::InvalidAmount(text.to_owned()));
    }

    Ok(amount)
}

/// Parse a zero-padded ISO calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::MissingDate);
    }

    Date::parse(text, ISO_DATE).map_err(|_| Error::InvalidDate(text.to_owned()))
}
