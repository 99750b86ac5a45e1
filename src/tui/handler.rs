//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, or to the dashboard when no
//! dialog is showing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::ConfirmReset => handle_confirm_key(app, key),
        ActiveDialog::EditValue => handle_edit_value_key(app, key),
        ActiveDialog::EditInfo => handle_edit_info_key(app, key),
    }
}

fn handle_normal_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Tab => app.next_card(),
        KeyCode::BackTab => app.prev_card(),

        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('e') => app.begin_edit_value(),
        KeyCode::Char('c') => app.cycle_chart(),
        KeyCode::Char('a') => app.add_card(),
        KeyCode::Char('i') => app.begin_edit_info(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('E') => app.toggle_edit_mode(),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),

        KeyCode::Char(c @ '1'..='9') => {
            if let Some(index) = c.to_digit(10) {
                app.select_tab(index as usize - 1);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            app.reset_all();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

fn handle_edit_value_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.commit_value(),
        KeyCode::Esc => app.close_dialog(),
        _ => edit_text(&mut app.edit_value.input, key),
    }
    Ok(())
}

fn handle_edit_info_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.commit_info_field(),
        KeyCode::Tab => app.next_info_field(),
        KeyCode::Esc => app.close_dialog(),
        _ => edit_text(&mut app.edit_info.input, key),
    }
    Ok(())
}

/// Line-editing keys shared by every text input
fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::CategoryKey;
    use crate::services::Dashboard;
    use crate::storage::MemoryStore;

    fn press<S: KeyValueStore>(app: &mut App<'_, S>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str<S: KeyValueStore>(app: &mut App<'_, S>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_space_toggles_selected_category() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_category(), Some(CategoryKey::Fence));
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.dashboard.total("repc"), Some(265000.0));
    }

    #[test]
    fn test_edit_value_dialog_flow() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.active_dialog, ActiveDialog::EditValue);

        press(&mut app, KeyCode::End);
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "12500");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let card = app.dashboard.card("repc").unwrap();
        assert_eq!(card.category(CategoryKey::Land).unwrap().value, 12500.0);
    }

    #[test]
    fn test_escape_discards_edit() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "999");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert_eq!(app.dashboard.total("repc"), Some(253000.0));
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.dashboard.cards().len(), 4);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.dashboard.cards().len(), 4);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.dashboard.cards().len(), 3);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_keys_in_dialog_do_not_reach_dashboard() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "q");

        assert!(!app.should_quit);
        assert_eq!(app.edit_info.input.value(), "Client Nameq");
    }

    #[test]
    fn test_number_keys_select_tabs_and_quit() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.dashboard.ui().tab, crate::models::KNOWN_TABS[1]);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
