//! Application state for the TUI
//!
//! The App owns the dashboard and the cursor into it. Key handlers call the
//! action methods here; rendering only reads.

use crate::config::Settings;
use crate::models::{Card, CardId, CaseInfoField, CategoryKey, KNOWN_TABS};
use crate::services::{Dashboard, Intent, Outcome};
use crate::storage::KeyValueStore;

use super::widgets::TextInput;

/// Ticks a status message stays on screen
const STATUS_TICKS: u16 = 16;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmReset,
    EditValue,
    EditInfo,
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    ticks_left: u16,
}

/// State of the edit-value dialog
#[derive(Debug, Clone, Default)]
pub struct EditValueState {
    pub card_id: Option<CardId>,
    pub key: Option<CategoryKey>,
    pub input: TextInput,
}

/// State of the client-info dialog
#[derive(Debug, Clone, Default)]
pub struct EditInfoState {
    pub field_index: usize,
    pub input: TextInput,
}

impl EditInfoState {
    pub fn field(&self) -> CaseInfoField {
        CaseInfoField::ALL[self.field_index % CaseInfoField::ALL.len()]
    }
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    pub dashboard: Dashboard<S>,

    pub settings: &'a Settings,

    pub should_quit: bool,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Index of the focused card
    pub selected_card_index: usize,

    /// Index into the focused card's present categories
    pub selected_category_index: usize,

    pub status: Option<StatusMessage>,

    pub edit_value: EditValueState,

    pub edit_info: EditInfoState,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    pub fn new(dashboard: Dashboard<S>, settings: &'a Settings) -> Self {
        Self {
            dashboard,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_card_index: 0,
            selected_category_index: 0,
            status: None,
            edit_value: EditValueState::default(),
            edit_info: EditInfoState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.set_status_kind(text, StatusKind::Info);
    }

    pub fn set_status_kind(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            ticks_left: STATUS_TICKS,
        });
    }

    /// Age the status message, dropping it once expired
    pub fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        self.input_mode = match dialog {
            ActiveDialog::EditValue | ActiveDialog::EditInfo => InputMode::Editing,
            _ => InputMode::Normal,
        };
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.dashboard.cards().get_index(self.selected_card_index)
    }

    pub fn selected_category(&self) -> Option<CategoryKey> {
        self.selected_card()?
            .ordered_categories()
            .nth(self.selected_category_index)
            .map(|(key, _)| key)
    }

    fn category_count(&self) -> usize {
        self.selected_card().map(|c| c.categories.len()).unwrap_or(0)
    }

    /// Keep both cursors inside the current data
    fn clamp_selection(&mut self) {
        let cards = self.dashboard.cards().len();
        if self.selected_card_index >= cards {
            self.selected_card_index = cards.saturating_sub(1);
        }
        let categories = self.category_count();
        if self.selected_category_index >= categories {
            self.selected_category_index = categories.saturating_sub(1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected_category_index = self.selected_category_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_category_index + 1 < self.category_count() {
            self.selected_category_index += 1;
        }
    }

    pub fn next_card(&mut self) {
        let cards = self.dashboard.cards().len();
        if cards > 0 {
            self.selected_card_index = (self.selected_card_index + 1) % cards;
            self.clamp_selection();
        }
    }

    pub fn prev_card(&mut self) {
        let cards = self.dashboard.cards().len();
        if cards > 0 {
            self.selected_card_index = (self.selected_card_index + cards - 1) % cards;
            self.clamp_selection();
        }
    }

    /// Dispatch an intent, reporting failures and storage warnings in the status bar
    pub fn apply(&mut self, intent: Intent) -> Option<Outcome> {
        let outcome = match self.dashboard.dispatch(intent) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.set_status_kind(e.to_string(), StatusKind::Error);
                return None;
            }
        };

        self.clamp_selection();
        if let Some(warning) = self.dashboard.take_warning() {
            self.set_status_kind(warning, StatusKind::Warning);
        }
        Some(outcome)
    }

    fn editing_blocked(&mut self) -> bool {
        if self.dashboard.ui().edit {
            return false;
        }
        self.set_status_kind("Edit mode is off (press E)", StatusKind::Warning);
        true
    }

    pub fn toggle_selected(&mut self) {
        let (Some(card), Some(key)) = (self.selected_card(), self.selected_category()) else {
            return;
        };
        let card_id = card.id.clone();
        self.apply(Intent::ToggleCategory { card_id, key });
    }

    pub fn cycle_chart(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        let intent = Intent::SetChartKind {
            card_id: card.id.clone(),
            kind: card.chart.flipped(),
        };
        self.apply(intent);
    }

    pub fn add_card(&mut self) {
        if let Some(Outcome::Applied { card_id: Some(id) }) = self.apply(Intent::AddCard) {
            if let Some(index) = self.dashboard.cards().iter().position(|c| c.id == id) {
                self.selected_card_index = index;
                self.selected_category_index = 0;
            }
            self.set_status(format!("Added card {}", id));
        }
    }

    pub fn toggle_theme(&mut self) {
        let dark = !self.dashboard.ui().dark;
        self.apply(Intent::SetTheme { dark });
    }

    pub fn toggle_edit_mode(&mut self) {
        let edit = !self.dashboard.ui().edit;
        if self.apply(Intent::SetEdit { edit }).is_some() {
            self.set_status(if edit { "Editing enabled" } else { "Editing locked" });
        }
    }

    /// Jump to the n-th navigation tab
    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = KNOWN_TABS.get(index) {
            self.apply(Intent::SetTab {
                tab: (*tab).to_string(),
            });
        }
    }

    pub fn begin_edit_value(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        let Some(key) = self.selected_category() else {
            return;
        };
        let current = card.category(key).map(|c| c.value).unwrap_or_default();

        self.edit_value = EditValueState {
            card_id: Some(card.id.clone()),
            key: Some(key),
            input: TextInput::new()
                .label(key.default_label())
                .content(format_plain(current)),
        };
        self.open_dialog(ActiveDialog::EditValue);
    }

    pub fn commit_value(&mut self) {
        let state = std::mem::take(&mut self.edit_value);
        self.close_dialog();
        if let (Some(card_id), Some(key)) = (state.card_id, state.key) {
            self.apply(Intent::SetCategoryValue {
                card_id,
                key,
                raw: state.input.value().to_string(),
            });
        }
    }

    pub fn begin_edit_info(&mut self) {
        if self.editing_blocked() {
            return;
        }
        self.edit_info.field_index = 0;
        self.load_info_field();
        self.open_dialog(ActiveDialog::EditInfo);
    }

    /// Move the info dialog to the next field, discarding uncommitted text
    pub fn next_info_field(&mut self) {
        self.edit_info.field_index = (self.edit_info.field_index + 1) % CaseInfoField::ALL.len();
        self.load_info_field();
    }

    fn load_info_field(&mut self) {
        let field = self.edit_info.field();
        self.edit_info.input = TextInput::new()
            .label(field.label())
            .content(self.dashboard.info().get(field));
    }

    /// Save the info field being edited and stay in the dialog
    pub fn commit_info_field(&mut self) {
        let field = self.edit_info.field();
        let value = self.edit_info.input.value().to_string();
        if self.apply(Intent::SetInfoField { field, value }).is_some() {
            self.set_status(format!("{} saved", field.label()));
        }
    }

    pub fn reset_all(&mut self) {
        self.dashboard.clear_all();
        self.selected_card_index = 0;
        self.selected_category_index = 0;
        match self.dashboard.take_warning() {
            Some(warning) => self.set_status_kind(warning, StatusKind::Warning),
            None => self.set_status("All state cleared"),
        }
    }
}

/// Amount as typed into an input: no symbol, no grouping, no trailing zeros
fn format_plain(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
