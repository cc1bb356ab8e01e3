//! Contains the traits and implementations for persisting the transaction collection.

mod key_value;
mod transaction;

pub use key_value::{FileStore, KeyValueStore, MemoryStore};
pub use transaction::{STORAGE_KEY, TransactionRepository};
