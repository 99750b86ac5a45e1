//! Path management for Briefly
//!
//! Resolves where configuration, dashboard data and logs live.
//!
//! ## Path Resolution Order
//!
//! 1. `BRIEFLY_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/briefly` on Linux,
//!    `~/Library/Application Support/briefly` on macOS, `%APPDATA%\briefly` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BrieflyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BRIEFLY_DATA_DIR";

/// Manages all paths used by Briefly
#[derive(Debug, Clone)]
pub struct BrieflyPaths {
    /// Base directory for all Briefly data
    base_dir: PathBuf,
}

impl BrieflyPaths {
    /// Create a new BrieflyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BrieflyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BrieflyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one JSON file per store key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("briefly.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BrieflyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BrieflyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BrieflyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BrieflyError> {
    ProjectDirs::from("", "", "briefly")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BrieflyError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BrieflyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BrieflyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BrieflyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.log_file(), temp_dir.path().join("briefly.log"));
    }
}
