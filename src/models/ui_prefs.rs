//! UI preferences: theme, active tab and edit mode

use serde::{Deserialize, Serialize};

/// Tab shown when nothing else has been chosen
pub const DASHBOARD_TAB: &str = "Dashboard";

/// Tabs offered by the navigation menu
pub const KNOWN_TABS: [&str; 4] = ["Home", "File Upload", "Messages", DASHBOARD_TAB];

/// UI preference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    /// Dark theme enabled
    pub dark: bool,
    /// Active navigation tab
    pub tab: String,
    /// Whether values and client info can be edited
    pub edit: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark: false,
            tab: DASHBOARD_TAB.to_string(),
            edit: true,
        }
    }
}

/// Partial update for [`UiPreferences`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferencesPatch {
    pub dark: Option<bool>,
    pub tab: Option<String>,
    pub edit: Option<bool>,
}

impl UiPreferences {
    /// A copy with every `Some` field of the patch applied
    pub fn merge(&self, patch: UiPreferencesPatch) -> UiPreferences {
        UiPreferences {
            dark: patch.dark.unwrap_or(self.dark),
            tab: patch.tab.unwrap_or_else(|| self.tab.clone()),
            edit: patch.edit.unwrap_or(self.edit),
        }
    }

    pub fn with_dark(&self, dark: bool) -> UiPreferences {
        self.merge(UiPreferencesPatch {
            dark: Some(dark),
            ..Default::default()
        })
    }

    pub fn with_tab(&self, tab: impl Into<String>) -> UiPreferences {
        self.merge(UiPreferencesPatch {
            tab: Some(tab.into()),
            ..Default::default()
        })
    }

    pub fn with_edit(&self, edit: bool) -> UiPreferences {
        self.merge(UiPreferencesPatch {
            edit: Some(edit),
            ..Default::default()
        })
    }

    /// Theme name for display
    pub fn theme_name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ui = UiPreferences::default();
        assert!(!ui.dark);
        assert_eq!(ui.tab, "Dashboard");
        assert!(ui.edit);
        assert_eq!(ui.theme_name(), "light");
    }

    #[test]
    fn test_merge_leaves_unset_fields() {
        let ui = UiPreferences::default();
        let next = ui.merge(UiPreferencesPatch {
            dark: Some(true),
            ..Default::default()
        });

        assert!(next.dark);
        assert_eq!(next.tab, ui.tab);
        assert_eq!(next.edit, ui.edit);
    }

    #[test]
    fn test_convenience_setters() {
        let ui = UiPreferences::default()
            .with_tab("Messages")
            .with_edit(false)
            .with_dark(true);

        assert_eq!(ui.tab, "Messages");
        assert!(!ui.edit);
        assert_eq!(ui.theme_name(), "dark");
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let ui: UiPreferences = serde_json::from_str(r#"{"dark": true}"#).unwrap();
        assert!(ui.dark);
        assert_eq!(ui.tab, "Dashboard");
        assert!(ui.edit);
    }
}
