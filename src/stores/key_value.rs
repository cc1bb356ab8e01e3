//! Key-value stores that hold serialized data under string keys.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::Error;

/// Handles reading and writing text values under fixed keys.
pub trait KeyValueStore {
    /// Get the value stored under `key`, or `None` if nothing has been stored.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Stores each key as a file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `directory`.
    ///
    /// The directory is created on the first write if it does not exist.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The file that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::StorageError(error.to_string())),
        }
    }

    /// Writes to a temporary file first and then renames it over the old
    /// value so that a failed write never leaves a half-written file behind.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.directory)
            .map_err(|error| Error::StorageError(error.to_string()))?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(|error| Error::StorageError(error.to_string()))?;
        fs::rename(&temp_path, &path).map_err(|error| Error::StorageError(error.to_string()))
    }
}

/// Keeps values in memory, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
