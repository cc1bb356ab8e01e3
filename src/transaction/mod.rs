//! Transactions and the operations on lists of them.
//!
//! This module contains:
//! - The `Transaction` model and its identifier
//! - Validation of user input for new transactions
//! - The filter engine that narrows a transaction list for display

mod core;
mod create;
mod filter;

pub use self::core::{Transaction, TransactionId, round_to_cents};
pub use create::{TransactionForm, TransactionKind, ValidatedTransaction, parse_date};
pub use filter::{CategoryFilter, FilterCriteria, TypeFilter, filter_transactions};
