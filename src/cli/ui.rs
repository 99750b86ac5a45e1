//! UI preference CLI commands

use clap::{Subcommand, ValueEnum};

use crate::display::format_ui_preferences;
use crate::error::BrieflyResult;
use crate::services::{Dashboard, Intent};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

/// UI preference subcommands
#[derive(Subcommand, Debug)]
pub enum UiCommands {
    /// Show theme, tab and edit mode
    Show,

    /// Choose the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },

    /// Choose the active navigation tab
    Tab {
        /// Tab name (Home, File Upload, Messages, Dashboard)
        name: String,
    },

    /// Allow or block editing of amounts and client info
    Edit {
        #[arg(value_enum)]
        state: Switch,
    },
}

/// Handle a UI preference command
pub fn handle_ui_command<S: KeyValueStore>(
    dashboard: &mut Dashboard<S>,
    cmd: UiCommands,
) -> BrieflyResult<()> {
    let intent = match cmd {
        UiCommands::Show => {
            print!("{}", format_ui_preferences(dashboard.ui()));
            return Ok(());
        }
        UiCommands::Theme { theme } => Intent::SetTheme {
            dark: matches!(theme, Theme::Dark),
        },
        UiCommands::Tab { name } => Intent::SetTab { tab: name },
        UiCommands::Edit { state } => Intent::SetEdit {
            edit: matches!(state, Switch::On),
        },
    };

    dashboard.dispatch(intent)?;
    print!("{}", format_ui_preferences(dashboard.ui()));
    Ok(())
}
