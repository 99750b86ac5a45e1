//! User intents and their results

use std::fmt;

use crate::models::{CardId, CaseInfoField, CategoryKey, ChartKind};

/// One user action against the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleCategory {
        card_id: CardId,
        key: CategoryKey,
    },
    SetCategoryValue {
        card_id: CardId,
        key: CategoryKey,
        /// Unparsed user input, coerced to a non-negative amount
        raw: String,
    },
    SetChartKind {
        card_id: CardId,
        kind: ChartKind,
    },
    RenameCard {
        card_id: CardId,
        title: String,
    },
    AddCard,
    SetInfoField {
        field: CaseInfoField,
        value: String,
    },
    SetTheme {
        dark: bool,
    },
    SetTab {
        tab: String,
    },
    SetEdit {
        edit: bool,
    },
}

/// Which stored records an intent can change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touches {
    pub cards: bool,
    pub info: bool,
    pub ui: bool,
}

impl Intent {
    /// Records that must be written back after this intent is applied
    pub fn touches(&self) -> Touches {
        match self {
            Intent::ToggleCategory { .. }
            | Intent::SetCategoryValue { .. }
            | Intent::SetChartKind { .. }
            | Intent::RenameCard { .. } => Touches {
                cards: true,
                ..Touches::default()
            },
            // Adding a card also jumps to the dashboard tab
            Intent::AddCard => Touches {
                cards: true,
                ui: true,
                ..Touches::default()
            },
            Intent::SetInfoField { .. } => Touches {
                info: true,
                ..Touches::default()
            },
            Intent::SetTheme { .. } | Intent::SetTab { .. } | Intent::SetEdit { .. } => Touches {
                ui: true,
                ..Touches::default()
            },
        }
    }

    /// Card the intent targets, if any
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Intent::ToggleCategory { card_id, .. }
            | Intent::SetCategoryValue { card_id, .. }
            | Intent::SetChartKind { card_id, .. }
            | Intent::RenameCard { card_id, .. } => Some(card_id),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::ToggleCategory { card_id, key } => write!(f, "toggle {}/{}", card_id, key),
            Intent::SetCategoryValue { card_id, key, raw } => {
                write!(f, "set {}/{} = {:?}", card_id, key, raw)
            }
            Intent::SetChartKind { card_id, kind } => write!(f, "chart {} {}", card_id, kind),
            Intent::RenameCard { card_id, title } => write!(f, "rename {} {:?}", card_id, title),
            Intent::AddCard => write!(f, "add card"),
            Intent::SetInfoField { field, value } => write!(f, "info {} = {:?}", field, value),
            Intent::SetTheme { dark } => write!(f, "theme {}", if *dark { "dark" } else { "light" }),
            Intent::SetTab { tab } => write!(f, "tab {:?}", tab),
            Intent::SetEdit { edit } => write!(f, "edit {}", if *edit { "on" } else { "off" }),
        }
    }
}

/// Result of dispatching an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and was written back; `card_id` names the card that was
    /// edited or created
    Applied { card_id: Option<CardId> },
    /// The intent named a card or category that doesn't exist
    Unchanged,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    /// The card that was edited or created
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Outcome::Applied { card_id } => card_id.as_ref(),
            Outcome::Unchanged => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches() {
        let toggle = Intent::ToggleCategory {
            card_id: CardId::new("repc"),
            key: CategoryKey::Fence,
        };
        assert_eq!(
            toggle.touches(),
            Touches {
                cards: true,
                info: false,
                ui: false
            }
        );

        let add = Intent::AddCard.touches();
        assert!(add.cards && add.ui && !add.info);

        let info = Intent::SetInfoField {
            field: CaseInfoField::Role,
            value: "Defendant".into(),
        };
        assert!(info.touches().info);
    }

    #[test]
    fn test_card_id() {
        let rename = Intent::RenameCard {
            card_id: CardId::new("budget2"),
            title: "Plan B".into(),
        };
        assert_eq!(rename.card_id().map(CardId::as_str), Some("budget2"));
        assert_eq!(Intent::SetEdit { edit: false }.card_id(), None);
    }

    #[test]
    fn test_display() {
        let intent = Intent::SetCategoryValue {
            card_id: CardId::new("repc"),
            key: CategoryKey::Slab,
            raw: "abc".into(),
        };
        assert_eq!(intent.to_string(), "set repc/slab = \"abc\"");
    }

    #[test]
    fn test_outcome_helpers() {
        let applied = Outcome::Applied {
            card_id: Some(CardId::new("repc")),
        };
        assert!(applied.is_applied());
        assert_eq!(applied.card_id().map(CardId::as_str), Some("repc"));
        assert!(!Outcome::Unchanged.is_applied());
    }
}
