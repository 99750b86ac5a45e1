//! CLI command handlers
//!
//! Bridges the clap argument types with the dashboard service.

pub mod card;
pub mod export;
pub mod history;
pub mod info;
pub mod ui;

pub use card::{handle_card_command, CardCommands};
pub use export::{handle_export, ExportFormat};
pub use history::handle_history;
pub use info::{handle_info_command, InfoCommands};
pub use ui::{handle_ui_command, UiCommands};

use crate::error::{BrieflyError, BrieflyResult};
use crate::models::UiPreferences;
use crate::services::Dashboard;
use crate::storage::KeyValueStore;

/// Fail when edit mode is switched off
pub fn ensure_editable(ui: &UiPreferences) -> BrieflyResult<()> {
    if ui.edit {
        Ok(())
    } else {
        Err(BrieflyError::Validation(
            "Edit mode is off. Run 'briefly ui edit on' first.".into(),
        ))
    }
}

/// Clear every stored record, or explain how to when not confirmed
pub fn handle_reset<S: KeyValueStore>(dashboard: &mut Dashboard<S>, yes: bool) -> BrieflyResult<()> {
    if !yes {
        println!("This clears every card, the client info and the UI preferences.");
        println!("To proceed, run again with --yes:");
        println!("  briefly reset --yes");
        return Ok(());
    }

    dashboard.clear_all();
    println!("All state cleared. Defaults restored.");
    Ok(())
}
