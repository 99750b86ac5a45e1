//! The dashboard: current state, its store, and intent dispatch
//!
//! Owns the three persisted records. Every applied intent is written back
//! right away, one key per affected record, and recorded in the audit log
//! when one is attached. Storage failures never abort a change: they are
//! logged and kept as [`Dashboard::last_warning`] for the view to show.

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::BrieflyResult;
use crate::models::{
    derive_series, derive_total, legend, Card, CardCollection, CardId, CaseInfo, ColorMode,
    LegendEntry, SeriesPoint, UiPreferences,
};
use crate::storage::{load_or_default, save, KeyValueStore, ALL_KEYS, CARDS_KEY, CASE_INFO_KEY, UI_PREFS_KEY};

use super::budget::{reduce, DashboardState};
use super::intent::{Intent, Outcome};

/// Budget dashboard bound to a store
pub struct Dashboard<S: KeyValueStore> {
    store: S,
    state: DashboardState,
    color_mode: ColorMode,
    audit: Option<AuditLogger>,
    last_warning: Option<String>,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Load every record from `store`, falling back to defaults per record
    pub fn load(store: S) -> Self {
        let state = Self::read_state(&store);
        Self {
            store,
            state,
            color_mode: ColorMode::default(),
            audit: None,
            last_warning: None,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Record applied intents in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    fn read_state(store: &S) -> DashboardState {
        DashboardState {
            cards: load_or_default(store, CARDS_KEY, CardCollection::defaults()),
            info: load_or_default(store, CASE_INFO_KEY, CaseInfo::default()),
            ui: load_or_default(store, UI_PREFS_KEY, UiPreferences::default()),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn cards(&self) -> &CardCollection {
        &self.state.cards
    }

    pub fn info(&self) -> &CaseInfo {
        &self.state.info
    }

    pub fn ui(&self) -> &UiPreferences {
        &self.state.ui
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.state.cards.get(id)
    }

    /// Chart entries for one card, `None` for an unknown id
    pub fn series(&self, id: &str) -> Option<Vec<SeriesPoint>> {
        self.card(id).map(|card| derive_series(card, self.color_mode))
    }

    /// Legend rows for one card, `None` for an unknown id
    pub fn legend(&self, id: &str) -> Option<Vec<LegendEntry>> {
        self.card(id).map(|card| legend(card, self.color_mode))
    }

    /// Active total for one card, `None` for an unknown id
    pub fn total(&self, id: &str) -> Option<f64> {
        self.card(id).map(derive_total)
    }

    /// Most recent storage problem, if any
    pub fn last_warning(&self) -> Option<&str> {
        self.last_warning.as_deref()
    }

    /// Take the pending warning so it is only reported once
    pub fn take_warning(&mut self) -> Option<String> {
        self.last_warning.take()
    }

    /// Apply `intent`, persist what it touched and audit the change
    ///
    /// Unknown cards and categories leave the state alone and yield
    /// [`Outcome::Unchanged`]. Malformed input such as a blank title is
    /// returned as an error.
    pub fn dispatch(&mut self, intent: Intent) -> BrieflyResult<Outcome> {
        let (next, card_id) = match reduce(&self.state, &intent) {
            Ok(result) => result,
            Err(e) if e.is_not_found() => {
                tracing::debug!(%intent, error = %e, "ignoring intent for missing target");
                return Ok(Outcome::Unchanged);
            }
            Err(e) => return Err(e),
        };

        let previous = std::mem::replace(&mut self.state, next);
        let touches = intent.touches();

        let mut warnings = Vec::new();
        if touches.cards {
            warnings.extend(persist(&self.store, CARDS_KEY, &self.state.cards));
        }
        if touches.info {
            warnings.extend(persist(&self.store, CASE_INFO_KEY, &self.state.info));
        }
        if touches.ui {
            warnings.extend(persist(&self.store, UI_PREFS_KEY, &self.state.ui));
        }
        if let Some(warning) = warnings.pop() {
            self.last_warning = Some(warning);
        }

        self.audit_change(&intent, &previous, card_id.as_ref());
        tracing::info!(%intent, "applied");

        Ok(Outcome::Applied { card_id })
    }

    /// Remove every stored record and reload, so defaults come back
    pub fn clear_all(&mut self) {
        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear stored value");
                self.last_warning = Some(format!("Could not clear {}: {}", key, e));
            }
        }
        self.reload();

        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&AuditEntry::reset(&ALL_KEYS)) {
                tracing::warn!(error = %e, "failed to write audit entry");
            }
        }
        tracing::info!("cleared all stored state");
    }

    /// Re-read every record from the store
    pub fn reload(&mut self) {
        self.state = Self::read_state(&self.store);
    }

    fn audit_change(&self, intent: &Intent, previous: &DashboardState, card_id: Option<&CardId>) {
        let Some(logger) = &self.audit else {
            return;
        };

        let mut entries = Vec::new();

        if let Some(id) = card_id {
            match (previous.cards.get(id.as_str()), self.state.cards.get(id.as_str())) {
                (None, Some(created)) => entries.push(AuditEntry::create(
                    EntityType::Card,
                    id.as_str(),
                    Some(created.title.clone()),
                    created,
                )),
                (Some(before), Some(after)) if before != after => {
                    entries.push(update_entry(EntityType::Card, id.as_str(), Some(after.title.clone()), before, after))
                }
                _ => {}
            }
        }
        if previous.info != self.state.info {
            entries.push(update_entry(
                EntityType::CaseInfo,
                CASE_INFO_KEY,
                None,
                &previous.info,
                &self.state.info,
            ));
        }
        if previous.ui != self.state.ui {
            entries.push(update_entry(
                EntityType::UiPreferences,
                UI_PREFS_KEY,
                None,
                &previous.ui,
                &self.state.ui,
            ));
        }

        if let Err(e) = logger.log_batch(&entries) {
            tracing::warn!(%intent, error = %e, "failed to write audit entry");
        }
    }
}

/// Save one record, turning a failure into a warning message
fn persist<S: KeyValueStore, T: Serialize>(store: &S, key: &str, value: &T) -> Option<String> {
    match save(store, key, value) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to save; change kept in memory only");
            Some(format!("Could not save {}: {}", key, e))
        }
    }
}

fn update_entry<T: Serialize>(
    entity_type: EntityType,
    entity_id: &str,
    entity_name: Option<String>,
    before: &T,
    after: &T,
) -> AuditEntry {
    let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
        (Ok(before_json), Ok(after_json)) => generate_diff(&before_json, &after_json),
        _ => None,
    };
    AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff)
}
