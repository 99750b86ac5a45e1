//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::ValueEnum;

use crate::error::{BrieflyError, BrieflyResult};
use crate::export::{export_breakdown_csv, export_full_json, export_full_yaml};
use crate::services::DashboardState;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (full dashboard)
    Json,
    /// YAML (full dashboard, human-readable)
    Yaml,
    /// CSV (category breakdown per card)
    Csv,
}

/// Write the dashboard to `output`
pub fn handle_export(
    state: &DashboardState,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> BrieflyResult<()> {
    let file = File::create(output).map_err(|e| {
        BrieflyError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_full_json(state, &mut writer, pretty)?,
        ExportFormat::Yaml => export_full_yaml(state, &mut writer)?,
        ExportFormat::Csv => export_breakdown_csv(&state.cards, &mut writer)?,
    }

    println!("Dashboard exported to: {}", output.display());
    Ok(())
}
