use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use briefly::audit::AuditLogger;
use briefly::cli::{
    handle_card_command, handle_export, handle_history, handle_info_command, handle_reset,
    handle_ui_command, CardCommands, ExportFormat, InfoCommands, UiCommands,
};
use briefly::config::{init_tracing, BrieflyPaths, LogTarget, Settings};
use briefly::services::Dashboard;
use briefly::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "briefly",
    version,
    about = "Terminal budgeting dashboard",
    long_about = "Briefly keeps budget cards whose cost categories can be switched \
                  on and off, with live totals, charts and the client details for \
                  the case, from the command line or an interactive dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    Tui,

    /// Budget card commands
    #[command(subcommand)]
    Card(CardCommands),

    /// Client info commands
    #[command(subcommand)]
    Info(InfoCommands),

    /// Theme, tab and edit-mode preferences
    #[command(subcommand)]
    Ui(UiCommands),

    /// Clear all stored state and restore the defaults
    Reset {
        /// Skip the confirmation hint and clear immediately
        #[arg(long)]
        yes: bool,
    },

    /// Export the dashboard to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BrieflyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_file = paths.log_file();
    let target = match cli.command {
        Some(Commands::Tui) => LogTarget::File(&log_file),
        _ => LogTarget::Stderr,
    };
    init_tracing(&settings.log_level, target);

    let store = open_file_store(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());
    let mut dashboard = Dashboard::load(store).with_color_mode(settings.color_mode);
    if settings.audit_enabled {
        dashboard = dashboard.with_audit(audit.clone());
    }

    match cli.command {
        Some(Commands::Tui) => {
            briefly::tui::run_tui(dashboard, &settings)?;
            return Ok(());
        }
        Some(Commands::Card(cmd)) => handle_card_command(&mut dashboard, &settings, cmd)?,
        Some(Commands::Info(cmd)) => handle_info_command(&mut dashboard, cmd)?,
        Some(Commands::Ui(cmd)) => handle_ui_command(&mut dashboard, cmd)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut dashboard, yes)?,
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export(dashboard.state(), &output, format, pretty)?;
            println!("Exported to {}", output.display());
        }
        Some(Commands::History { limit }) => handle_history(&audit, limit)?,
        Some(Commands::Config) => {
            println!("Briefly Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("TUI log:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Color mode:      {:?}", settings.color_mode);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Briefly - terminal budgeting dashboard");
            println!();
            println!("Run 'briefly --help' for usage information.");
            println!("Run 'briefly tui' to launch the interactive dashboard.");
        }
    }

    if let Some(warning) = dashboard.take_warning() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
