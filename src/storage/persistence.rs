//! Typed load/save on top of a [`KeyValueStore`]
//!
//! Loading never fails: anything short of a clean parse yields the default.
//! Saving reports its error so the caller can decide how loudly to complain.

use serde::{de::DeserializeOwned, Serialize};

use super::store::KeyValueStore;
use crate::error::{BrieflyError, BrieflyResult};

/// Store key of the card collection
pub const CARDS_KEY: &str = "briefly_cards_v1";

/// Store key of the client-info record
pub const CASE_INFO_KEY: &str = "briefly_case_info_v1";

/// Store key of the UI preferences
pub const UI_PREFS_KEY: &str = "briefly_ui_prefs_v1";

/// Every key the dashboard owns
pub const ALL_KEYS: [&str; 3] = [CARDS_KEY, CASE_INFO_KEY, UI_PREFS_KEY];

/// Load `key`, substituting `default` when it is absent, unreadable or corrupt
pub fn load_or_default<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value, using default");
            return default;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is corrupt, using default");
            default
        }
    }
}

/// Serialize `value` and write it under `key`
pub fn save<T, S>(store: &S, key: &str, value: &T) -> BrieflyResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|e| BrieflyError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &json)?;
    tracing::debug!(key, bytes = json.len(), "saved");
    Ok(())
}
