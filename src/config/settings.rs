//! User settings for Briefly
//!
//! Manages preferences that are not part of the dashboard state itself:
//! currency formatting, chart coloring, audit logging and log verbosity.

use serde::{Deserialize, Serialize};

use super::paths::BrieflyPaths;
use crate::error::BrieflyError;
use crate::models::ColorMode;
use crate::storage::write_atomic;

/// User settings for Briefly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How chart colors are assigned to active categories
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Whether applied changes are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Default tracing filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            color_mode: ColorMode::default(),
            audit_enabled: default_audit_enabled(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BrieflyPaths) -> Result<Self, BrieflyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BrieflyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BrieflyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // First run: write the defaults so there is a file to edit
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BrieflyPaths) -> Result<(), BrieflyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BrieflyError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_atomic(paths.settings_file(), contents.as_bytes())?;

        Ok(())
    }
}
