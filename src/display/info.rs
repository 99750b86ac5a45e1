//! Client info and UI preference formatting

use crate::models::{CaseInfo, CaseInfoField, UiPreferences, KNOWN_TABS};

/// Format the client-info record, one field per line
pub fn format_case_info(info: &CaseInfo) -> String {
    let width = CaseInfoField::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    CaseInfoField::ALL
        .iter()
        .map(|field| format!("{:width$}  {}\n", field.label(), info.get(*field), width = width))
        .collect()
}

/// Format the UI preferences, marking the active tab
pub fn format_ui_preferences(ui: &UiPreferences) -> String {
    let mut output = String::new();
    output.push_str(&format!("Theme: {}\n", ui.theme_name()));
    output.push_str(&format!("Edit:  {}\n", if ui.edit { "on" } else { "off" }));
    output.push_str("Tabs:\n");

    for tab in KNOWN_TABS {
        let marker = if ui.tab == tab { "*" } else { " " };
        output.push_str(&format!("  {} {}\n", marker, tab));
    }
    if !KNOWN_TABS.contains(&ui.tab.as_str()) {
        output.push_str(&format!("  * {} (custom)\n", ui.tab));
    }

    output
}
