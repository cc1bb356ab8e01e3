//! Persists the transaction collection as one JSON array.

use std::collections::HashSet;

use crate::{Error, stores::KeyValueStore, transaction::Transaction};

/// The key the transaction collection is stored under.
pub const STORAGE_KEY: &str = "expenses_v3";

/// Loads and saves the whole transaction collection through a [KeyValueStore].
#[derive(Debug, Clone)]
pub struct TransactionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> TransactionRepository<S> {
    /// Create a repository backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored transactions.
    ///
    /// Missing or unreadable data, or text that is not a JSON array, is
    /// treated as an empty collection. Within the array, entries that cannot
    /// be read as a transaction are skipped and the rest are kept. Entries
    /// whose ID was already seen are dropped so that IDs stay unique.
    pub fn load(&self) -> Vec<Transaction> {
        let text = match self.store.get(STORAGE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!("No stored transactions under \"{STORAGE_KEY}\", starting empty.");
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!("Could not read stored transactions, starting empty: {error}");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!("Stored transactions are malformed, starting empty: {error}");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut duplicates = 0;
        let mut transactions = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let transaction: Transaction = match serde_json::from_value(record) {
                Ok(transaction) => transaction,
                Err(error) => {
                    tracing::warn!("Skipping unreadable stored transaction at index {index}: {error}");
                    continue;
                }
            };

            if seen.insert(transaction.id.clone()) {
                transactions.push(transaction);
            } else {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            tracing::warn!("Dropped {duplicates} stored transactions with duplicate IDs.");
        }

        tracing::debug!("Loaded {} transactions.", transactions.len());
        transactions
    }

    /// Replace the stored collection with `transactions`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::JSONSerializationError] if the transactions cannot be serialized,
    /// - or [Error::StorageError] if the store could not be written.
    pub fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let text = serde_json::to_string(transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.store.set(STORAGE_KEY, &text)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::Category,
        stores::{KeyValueStore, MemoryStore, STORAGE_KEY, TransactionRepository},
        transaction::{Transaction, TransactionId},
    };

    fn create_test_transaction(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            description: "test".to_owned(),
            amount,
            category: Category::Food,
            date: date!(2024 - 01 - 15),
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _: &str) -> Result<Option<String>, Error> {
            Err(Error::StorageError("disk on fire".to_owned()))
        }

        fn set(&mut self, _: &str, _: &str) -> Result<(), Error> {
            Err(Error::StorageError("disk on fire".to_owned()))
        }
    }

    #[test]
    fn loads_empty_when_nothing_stored() {
        let repository = TransactionRepository::new(MemoryStore::new());

        assert!(repository.load().is_empty());
    }

    #[test]
    fn loads_what_was_saved() {
        let mut repository = TransactionRepository::new(MemoryStore::new());
        let transactions = vec![
            create_test_transaction("a", -40.0),
            create_test_transaction("b", 100.0),
        ];

        repository.save(&transactions).unwrap();

        assert_eq!(repository.load(), transactions);
    }

    #[test]
    fn loads_empty_when_data_is_malformed() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();
        let repository = TransactionRepository::new(store);

        assert!(repository.load().is_empty());
    }

    #[test]
    fn loads_empty_when_data_is_null() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "null").unwrap();
        let repository = TransactionRepository::new(store);

        assert!(repository.load().is_empty());
    }

    #[test]
    fn loads_empty_when_store_cannot_be_read() {
        let repository = TransactionRepository::new(BrokenStore);

        assert!(repository.load().is_empty());
    }

    #[test]
    fn loads_data_in_browser_format() {
        let mut store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"[{"id":"lq2x9abc","text":"Lunch","amount":-12.5,"category":"Food","date":"2024-01-05"}]"#,
            )
            .unwrap();
        let repository = TransactionRepository::new(store);

        let transactions = repository.load();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, TransactionId::from("lq2x9abc"));
        assert_eq!(transactions[0].date, date!(2024 - 01 - 05));
    }

    #[test]
    fn drops_duplicate_ids_on_load() {
        let mut repository = TransactionRepository::new(MemoryStore::new());
        repository
            .save(&[
                create_test_transaction("a", -1.0),
                create_test_transaction("a", -2.0),
            ])
            .unwrap();

        let transactions = repository.load();

        assert_eq!(transactions, vec![create_test_transaction("a", -1.0)]);
    }

    #[test]
    fn drops_only_unreadable_records_on_load() {
        let mut store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"[
                    {"id":"a","text":"Lunch","amount":-12.5,"category":"Food","date":"2024-01-05"},
                    {"id":"b","text":"Flowers","amount":-20,"category":"Gifts","date":"2024-01-06"},
                    {"id":"c","text":"Bus","amount":-3,"category":"Transport","date":"06/01/2024"},
                    {"id":"d","text":"Salary","amount":100,"category":"Salary","date":"2024-01-07"}
                ]"#,
            )
            .unwrap();
        let repository = TransactionRepository::new(store);

        let ids: Vec<TransactionId> = repository
            .load()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(ids, vec![TransactionId::from("a"), TransactionId::from("d")]);
    }

    #[test]
    fn loads_empty_when_data_is_not_an_array() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, r#"{"id":"a"}"#).unwrap();
        let repository = TransactionRepository::new(store);

        assert!(repository.load().is_empty());
    }

    #[test]
    fn save_propagates_store_errors() {
        let mut repository = TransactionRepository::new(BrokenStore);

        let result = repository.save(&[]);

        assert_eq!(result, Err(Error::StorageError("disk on fire".to_owned())));
    }
}
