//! Pure reducer over the dashboard state
//!
//! `reduce` never touches storage. It returns the next state, or the error
//! from the model layer unchanged.

use crate::error::BrieflyResult;
use crate::models::{CardCollection, CardId, CaseInfo, UiPreferences, DASHBOARD_TAB};

use super::intent::Intent;

/// Everything the dashboard persists
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub cards: CardCollection,
    pub info: CaseInfo,
    pub ui: UiPreferences,
}

impl DashboardState {
    /// First-run state: the sample cards and placeholder details
    pub fn defaults() -> Self {
        Self {
            cards: CardCollection::defaults(),
            info: CaseInfo::default(),
            ui: UiPreferences::default(),
        }
    }
}

/// Apply one intent, returning the next state and the card it created or edited
pub fn reduce(state: &DashboardState, intent: &Intent) -> BrieflyResult<(DashboardState, Option<CardId>)> {
    let mut next = state.clone();
    let mut touched_card = intent.card_id().cloned();

    match intent {
        Intent::ToggleCategory { card_id, key } => {
            next.cards = state.cards.toggle_category(card_id.as_str(), *key)?;
        }
        Intent::SetCategoryValue { card_id, key, raw } => {
            next.cards = state.cards.set_category_value(card_id.as_str(), *key, raw)?;
        }
        Intent::SetChartKind { card_id, kind } => {
            next.cards = state.cards.set_chart_kind(card_id.as_str(), *kind)?;
        }
        Intent::RenameCard { card_id, title } => {
            next.cards = state.cards.rename_card(card_id.as_str(), title)?;
        }
        Intent::AddCard => {
            let (cards, id) = state.cards.add_card();
            next.cards = cards;
            next.ui = state.ui.with_tab(DASHBOARD_TAB);
            touched_card = Some(id);
        }
        Intent::SetInfoField { field, value } => {
            next.info = state.info.set_field(*field, value.as_str());
        }
        Intent::SetTheme { dark } => next.ui = state.ui.with_dark(*dark),
        Intent::SetTab { tab } => next.ui = state.ui.with_tab(tab.as_str()),
        Intent::SetEdit { edit } => next.ui = state.ui.with_edit(*edit),
    }

    Ok((next, touched_card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{derive_total, CaseInfoField, CategoryKey, ChartKind};

    fn toggle(card: &str, key: CategoryKey) -> Intent {
        Intent::ToggleCategory {
            card_id: CardId::new(card),
            key,
        }
    }

    #[test]
    fn test_toggle_updates_only_the_card() {
        let state = DashboardState::defaults();
        let (next, card) = reduce(&state, &toggle("repc", CategoryKey::Fence)).unwrap();

        assert_eq!(card.map(|id| id.to_string()), Some("repc".to_string()));
        assert_eq!(derive_total(next.cards.get("repc").unwrap()), 265000.0);
        assert_eq!(next.info, state.info);
        assert_eq!(next.ui, state.ui);
        // input snapshot is untouched
        assert_eq!(derive_total(state.cards.get("repc").unwrap()), 253000.0);
    }

    #[test]
    fn test_value_then_chart() {
        let state = DashboardState::defaults();
        let (state, _) = reduce(
            &state,
            &Intent::SetCategoryValue {
                card_id: CardId::new("repc"),
                key: CategoryKey::Slab,
                raw: "abc".into(),
            },
        )
        .unwrap();
        let (state, _) = reduce(
            &state,
            &Intent::SetChartKind {
                card_id: CardId::new("repc"),
                kind: ChartKind::Bar,
            },
        )
        .unwrap();

        let repc = state.cards.get("repc").unwrap();
        assert_eq!(repc.category(CategoryKey::Slab).unwrap().value, 0.0);
        assert_eq!(repc.chart, ChartKind::Bar);
    }

    #[test]
    fn test_add_card_switches_to_dashboard_tab() {
        let state = DashboardState {
            ui: UiPreferences::default().with_tab("Messages"),
            ..DashboardState::defaults()
        };

        let (next, card) = reduce(&state, &Intent::AddCard).unwrap();

        let id = card.unwrap();
        assert!(next.cards.contains(id.as_str()));
        assert_eq!(next.cards.len(), 4);
        assert_eq!(next.ui.tab, DASHBOARD_TAB);
    }

    #[test]
    fn test_unknown_card_is_not_found() {
        let err = reduce(&DashboardState::defaults(), &toggle("nope", CategoryKey::Land)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let err = reduce(
            &DashboardState::defaults(),
            &Intent::RenameCard {
                card_id: CardId::new("repc"),
                title: "   ".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_info_and_ui_intents() {
        let state = DashboardState::defaults();
        let (state, card) = reduce(
            &state,
            &Intent::SetInfoField {
                field: CaseInfoField::ClientName,
                value: "Ada Lovelace".into(),
            },
        )
        .unwrap();
        let (state, _) = reduce(&state, &Intent::SetTheme { dark: true }).unwrap();
        let (state, _) = reduce(&state, &Intent::SetEdit { edit: false }).unwrap();
        let (state, _) = reduce(&state, &Intent::SetTab { tab: "Home".into() }).unwrap();

        assert_eq!(card, None);
        assert_eq!(state.info.client_name, "Ada Lovelace");
        assert!(state.ui.dark);
        assert!(!state.ui.edit);
        assert_eq!(state.ui.tab, "Home");
        assert_eq!(state.cards, CardCollection::defaults());
    }
}
