//! JSON export of the whole dashboard

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BrieflyError, BrieflyResult};
use crate::models::{derive_total, CardCollection, CaseInfo, UiPreferences};
use crate::services::DashboardState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the dashboard stores, plus computed totals for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of briefly that wrote the file
    pub app_version: String,
    pub cards: CardCollection,
    pub case_info: CaseInfo,
    pub ui_preferences: UiPreferences,
    pub totals: Vec<CardTotal>,
}

/// Active total of one card at export time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTotal {
    pub card_id: String,
    pub title: String,
    pub total: f64,
}

impl DashboardExport {
    /// Snapshot the given state
    pub fn from_state(state: &DashboardState) -> Self {
        let totals = state
            .cards
            .iter()
            .map(|card| CardTotal {
                card_id: card.id.to_string(),
                title: card.title.clone(),
                total: derive_total(card),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            cards: state.cards.clone(),
            case_info: state.info.clone(),
            ui_preferences: state.ui.clone(),
            totals,
        }
    }
}

/// Write the dashboard as JSON
pub fn export_full_json<W: Write>(
    state: &DashboardState,
    writer: &mut W,
    pretty: bool,
) -> BrieflyResult<()> {
    let export = DashboardExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BrieflyError::Export(e.to_string()))?;

    Ok(())
}
