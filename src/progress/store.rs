// src/progress/store.rs

//! Key/value storage for the completed set.
//!
//! [`Storage`] mirrors browser local storage: string keys mapping to string
//! values. [`ProgressStore`] binds a storage backend to one key and handles
//! the JSON encoding of the [`CompletedSet`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{RamosError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::progress::CompletedSet;

/// Abstract string key/value storage.
pub trait Storage: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Stores each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileStorage {
    /// File storage on the real filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(Arc::new(RealFileSystem), dir)
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !is_usable_key(key) {
            return Err(RamosError::StorageError(format!(
                "storage key '{}' is not usable as a file name",
                key
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Whether `key` can name a file directly under the storage directory.
pub fn is_usable_key(key: &str) -> bool {
    !key.trim().is_empty() && !key.contains(['/', '\\']) && key != "." && key != ".."
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        Ok(self.fs.read_optional(&path)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.fs.write(&path, value.as_bytes())?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.fs.remove(&path)?;
        Ok(())
    }
}

/// Storage held in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// The completed set bound to one storage key.
pub struct ProgressStore {
    storage: Box<dyn Storage>,
    key: String,
}

impl ProgressStore {
    pub fn new(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored set. Absent key yields the empty set.
    pub fn try_load(&self) -> Result<CompletedSet> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => CompletedSet::from_json(&raw),
            None => Ok(CompletedSet::new()),
        }
    }

    /// Encode and write the set, overwriting any prior value.
    pub fn try_save(&mut self, completed: &CompletedSet) -> Result<()> {
        let raw = completed.to_json()?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Fail-soft load: unreadable storage or malformed JSON yields the empty
    /// set.
    pub fn load(&self) -> CompletedSet {
        match self.try_load() {
            Ok(set) => {
                debug!(key = %self.key, count = set.len(), "loaded completed set");
                set
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "could not load progress; starting empty");
                CompletedSet::new()
            }
        }
    }

    /// Fail-soft save. Returns whether the write succeeded.
    pub fn save(&mut self, completed: &CompletedSet) -> bool {
        match self.try_save(completed) {
            Ok(()) => {
                info!(key = %self.key, count = completed.len(), "saved completed set");
                true
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "could not save progress");
                false
            }
        }
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
