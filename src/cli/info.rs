//! Client info CLI commands

use clap::Subcommand;

use crate::display::format_case_info;
use crate::error::BrieflyResult;
use crate::models::CaseInfoField;
use crate::services::{Dashboard, Intent};
use crate::storage::KeyValueStore;

use super::ensure_editable;

/// Client info subcommands
#[derive(Subcommand, Debug)]
pub enum InfoCommands {
    /// Show the client and case details
    Show,

    /// Change one field
    Set {
        /// Field (client-name, role, attorneys, case-id)
        field: CaseInfoField,
        /// New value
        value: String,
    },
}

/// Handle a client info command
pub fn handle_info_command<S: KeyValueStore>(
    dashboard: &mut Dashboard<S>,
    cmd: InfoCommands,
) -> BrieflyResult<()> {
    match cmd {
        InfoCommands::Show => print!("{}", format_case_info(dashboard.info())),
        InfoCommands::Set { field, value } => {
            ensure_editable(dashboard.ui())?;
            dashboard.dispatch(Intent::SetInfoField { field, value })?;
            println!("{}: {}", field.label(), dashboard.info().get(field));
        }
    }
    Ok(())
}
