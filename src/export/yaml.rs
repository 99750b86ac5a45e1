//! YAML export of the whole dashboard

use std::io::Write;

use crate::error::{BrieflyError, BrieflyResult};
use crate::export::json::DashboardExport;
use crate::services::DashboardState;

/// Write the dashboard as YAML with a short comment header
pub fn export_full_yaml<W: Write>(state: &DashboardState, writer: &mut W) -> BrieflyResult<()> {
    let export = DashboardExport::from_state(state);

    let header = format!(
        "# Briefly dashboard export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BrieflyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BrieflyError::Export(e.to_string()))?;

    Ok(())
}
