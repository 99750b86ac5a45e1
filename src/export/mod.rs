//! Export of the dashboard
//!
//! - JSON and YAML: the full dashboard with schema version and totals
//! - CSV: the per-card category breakdown, for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_breakdown_csv;
pub use json::{export_full_json, CardTotal, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
