//! Core data models for Briefly
//!
//! Budget cards and their categories, the client-info record and the UI
//! preferences, plus the chart data derived from cards.

pub mod card;
pub mod case_info;
pub mod category;
pub mod collection;
pub mod series;
pub mod ui_prefs;

pub use card::{Card, CardId, ChartKind};
pub use case_info::{CaseInfo, CaseInfoField, CaseInfoPatch};
pub use category::{parse_amount, Category, CategoryKey};
pub use collection::{CardCollection, NEW_CARD_TITLE, TEMPLATE_CARD_ID};
pub use series::{derive_series, derive_total, legend, ColorMode, LegendEntry, SeriesPoint, PALETTE};
pub use ui_prefs::{UiPreferences, UiPreferencesPatch, DASHBOARD_TAB, KNOWN_TABS};
