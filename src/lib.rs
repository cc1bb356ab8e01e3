//! A personal expense ledger.
//!
//! Records income and expenses, persists them to a local key-value store and
//! derives the views shown to the user:
//! - the transaction list narrowed by [FilterCriteria],
//! - a [Summary] of the listed transactions,
//! - expense totals per category for a pie chart,
//! - monthly income and expense totals over the whole history for a bar chart.
//!
//! The derivations are pure functions over a slice of transactions. The
//! [Ledger] owns the authoritative collection and keeps it in sync with its
//! store.

#![warn(missing_docs)]

mod category;
mod dashboard;
mod format;
mod ledger;
mod month;
mod stores;
mod timezone;
mod transaction;

pub use category::Category;
pub use dashboard::{
    CategoryTotal, CategoryTotals, DEFAULT_WINDOW_MONTHS, DashboardChart, MonthBucket,
    NO_EXPENSES_LABEL, StatusLine, Summary, category_totals, dashboard_charts, expense_pie_chart,
    monthly_bar_chart, monthly_series, palette, summarize,
};
pub use format::{
    CURRENCY_SYMBOL, format_currency, format_date, format_month_label, format_signed_amount,
};
pub use ledger::{Ledger, LedgerView};
pub use month::YearMonth;
pub use stores::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY, TransactionRepository};
pub use timezone::local_today;
pub use transaction::{
    CategoryFilter, FilterCriteria, Transaction, TransactionForm, TransactionId, TransactionKind,
    TypeFilter, ValidatedTransaction, filter_transactions, parse_date, round_to_cents,
};

/// The errors that may occur in the application.
///
/// Filtering and aggregation never fail; errors only come from validating
/// user input and from writing to storage.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The description of a new transaction was empty or only whitespace.
    #[error("a description is required")]
    EmptyDescription,

    /// The amount of a new transaction was not a finite, non-zero number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// No date was given for a new transaction.
    #[error("a date is required")]
    MissingDate,

    /// The date of a new transaction was not a valid `YYYY-MM-DD` date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The text did not name a known category.
    #[error("\"{0}\" is not a known category")]
    InvalidCategory(String),

    /// The text did not name a transaction type.
    #[error("\"{0}\" is not a transaction type, expected income or expense")]
    InvalidTransactionKind(String),

    /// The text did not name a type filter.
    #[error("\"{0}\" is not a type filter, expected all, income or expense")]
    InvalidTypeFilter(String),

    /// The store could not be read or written.
    ///
    /// Read failures are recovered from by starting with an empty
    /// collection, so callers only see this error when saving.
    #[error("could not access storage: {0}")]
    StorageError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl Error {
    /// Whether the error was caused by invalid user input, as opposed to a
    /// storage failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyDescription
                | Error::InvalidAmount(_)
                | Error::MissingDate
                | Error::InvalidDate(_)
                | Error::InvalidCategory(_)
                | Error::InvalidTransactionKind(_)
                | Error::InvalidTypeFilter(_)
        )
    }
}
