//! File-backed key-value store.
//!
//! The whole mapping is loaded once when the store is opened and rewritten in full
//! on every `put`. Writes are synchronous and last-write-wins; there is no
//! journaling, so a crash mid-write may leave a truncated file behind.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

pub struct JsonFileStore<V> {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, V>>,
}

impl<V> JsonFileStore<V>
where
    V: Serialize + DeserializeOwned + Clone,
{
    /// Opens the store, loading the current contents of `path`.
    ///
    /// A missing or blank file yields an empty store; the file is created on the
    /// first `put`.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON object file
    ///
    /// # Returns
    /// - `Ok(JsonFileStore)` - Store with the file's entries
    /// - `Err(AppError::IoErr)` - File exists but cannot be read
    /// - `Err(AppError::JsonErr)` - File content is not a JSON object of the value type
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                tracing::info!("{} is empty, starting fresh", path.display());
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            tracing::info!("{} not found, it will be created on first write", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Inserts or overwrites a value and rewrites the whole file.
    ///
    /// The in-memory entry is updated even when the write fails, so the value stays
    /// visible for the rest of the process lifetime.
    pub fn put(&self, key: &str, value: V) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&*entries)?;
        fs::write(&self.path, content)?;

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
