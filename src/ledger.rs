//! The ledger session that owns the transaction collection.

use serde::Serialize;
use time::Date;

use crate::{
    Error,
    dashboard::{
        CategoryTotals, DEFAULT_WINDOW_MONTHS, MonthBucket, StatusLine, Summary, category_totals,
        monthly_series, summarize,
    },
    stores::{KeyValueStore, TransactionRepository},
    transaction::{FilterCriteria, Transaction, TransactionForm, TransactionId, filter_transactions},
};

/// Everything the presentation layer shows for one set of filter criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerView {
    /// The transactions matching the criteria, newest first.
    pub transactions: Vec<Transaction>,
    /// Totals over the matching transactions.
    pub summary: Summary,
    /// Expenses per category over the matching transactions.
    pub category_totals: CategoryTotals,
    /// Monthly income and expenses over all transactions, ignoring the criteria.
    pub monthly_series: Vec<MonthBucket>,
    /// How many transactions are shown out of how many exist.
    pub status: StatusLine,
}

/// A single user's ledger: the authoritative transaction collection and the
/// store it is persisted to.
///
/// The collection is loaded once when the ledger is opened and saved after
/// every change, so the stored and in-memory collections always agree.
#[derive(Debug)]
pub struct Ledger<S> {
    repository: TransactionRepository<S>,
    transactions: Vec<Transaction>,
    window_months: u32,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Open the ledger, loading any previously stored transactions.
    pub fn open(store: S) -> Self {
        let repository = TransactionRepository::new(store);
        let transactions = repository.load();

        Self {
            repository,
            transactions,
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }

    /// Set how many months the monthly trend covers.
    pub fn with_window_months(mut self, window_months: u32) -> Self {
        self.window_months = window_months;
        self
    }

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        self.repository.store()
    }

    /// Record a new transaction from user input.
    ///
    /// The transaction is given a fresh ID and placed at the front of the list.
    ///
    /// # Errors
    /// Returns a validation error from [TransactionForm::validate] if the input
    /// is invalid, or a storage error if the collection could not be saved. In
    /// both cases the ledger is left unchanged.
    pub fn add(&mut self, form: TransactionForm) -> Result<Transaction, Error> {
        let validated = form.validate().inspect_err(|error| {
            tracing::warn!("Rejected new transaction: {error}");
        })?;

        let mut id = TransactionId::generate();
        while self.transactions.iter().any(|transaction| transaction.id == id) {
            id = TransactionId::generate();
        }

        let transaction = validated.into_transaction(id);

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(transaction.clone());
        transactions.extend(self.transactions.iter().cloned());
        self.commit(transactions)?;

        tracing::info!(
            "Added transaction {} ({} on {})",
            transaction.id,
            transaction.amount,
            transaction.date
        );

        Ok(transaction)
    }

    /// Delete the transaction with `id`.
    ///
    /// Deleting an ID that does not exist leaves the ledger and its store
    /// untouched, so deleting the same ID twice is the same as deleting it
    /// once.
    ///
    /// Returns whether a transaction was removed.
    ///
    /// # Errors
    /// Returns a storage error if the collection could not be saved.
    pub fn delete(&mut self, id: &TransactionId) -> Result<bool, Error> {
        let transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| &transaction.id != id)
            .cloned()
            .collect();
        if transactions.len() == self.transactions.len() {
            tracing::debug!("No transaction with ID {id} to delete");
            return Ok(false);
        }

        self.commit(transactions)?;

        tracing::info!("Deleted transaction {id}");
        Ok(true)
    }

    /// Delete every transaction.
    ///
    /// # Errors
    /// Returns a storage error if the collection could not be saved.
    pub fn clear(&mut self) -> Result<(), Error> {
        let count = self.transactions.len();
        self.commit(Vec::new())?;

        tracing::info!("Cleared {count} transactions");
        Ok(())
    }

    /// Recompute every derived view for `criteria`.
    ///
    /// The monthly series covers the window ending with the month of `anchor`
    /// and always uses the full, unfiltered history.
    pub fn view(&self, criteria: &FilterCriteria, anchor: Date) -> LedgerView {
        let filtered = filter_transactions(&self.transactions, criteria);

        tracing::debug!(
            "Showing {} of {} transactions",
            filtered.len(),
            self.transactions.len()
        );

        LedgerView {
            summary: summarize(&filtered),
            category_totals: category_totals(&filtered),
            monthly_series: monthly_series(&self.transactions, self.window_months, anchor),
            status: StatusLine {
                total: self.transactions.len(),
                shown: filtered.len(),
            },
            transactions: filtered,
        }
    }

    /// Save `transactions` and make them the current collection only once the
    /// save has succeeded.
    fn commit(&mut self, transactions: Vec<Transaction>) -> Result<(), Error> {
        self.repository.save(&transactions).inspect_err(|error| {
            tracing::error!("Could not save transactions: {error}");
        })?;

        self.transactions = transactions;
        Ok(())
    }
}
