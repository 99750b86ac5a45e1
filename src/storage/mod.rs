//! Storage layer for Briefly
//!
//! Provides the keyed store abstraction, a JSON-file implementation with
//! atomic writes, and typed load/save helpers.

pub mod file_io;
pub mod persistence;
pub mod store;

pub use file_io::{read_if_exists, write_atomic, write_json_atomic};
pub use persistence::{load_or_default, save, ALL_KEYS, CARDS_KEY, CASE_INFO_KEY, UI_PREFS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::BrieflyPaths;
use crate::error::BrieflyError;

/// Open the file store under the configured data directory
pub fn open_file_store(paths: &BrieflyPaths) -> Result<FileStore, BrieflyError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BrieflyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_file_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.dir(), &paths.data_dir());
    }
}
