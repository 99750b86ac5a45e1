//! Persistent keyed stores
//!
//! A store maps a string key to a JSON text blob. The dashboard only talks to
//! the [`KeyValueStore`] trait, so it can run against files on disk or an
//! in-memory map.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BrieflyError;

use super::file_io::{read_if_exists, write_atomic};

/// String key to JSON text, surviving restarts for persistent implementations
pub trait KeyValueStore {
    /// Fetch the raw value for `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, BrieflyError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), BrieflyError>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), BrieflyError>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory the store writes into
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, BrieflyError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BrieflyError::Storage(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrieflyError> {
        read_if_exists(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrieflyError> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<(), BrieflyError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BrieflyError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Volatile store, mainly for tests and previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrieflyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BrieflyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrieflyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BrieflyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BrieflyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BrieflyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, BrieflyError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrieflyError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), BrieflyError> {
        (**self).remove(key)
    }
}
