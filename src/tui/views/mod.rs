//! TUI views
//!
//! The screen is a header with navigation, the client-info panel on the
//! left, the card panels on the right and a one-line status bar.

pub mod dashboard;
pub mod header;
pub mod info;
pub mod status_bar;

use ratatui::{
    style::{Color, Style},
    widgets::Block,
    Frame,
};

use crate::models::UiPreferences;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Colors for the current light or dark theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Theme {
    pub fn for_ui(ui: &UiPreferences) -> Self {
        if ui.dark {
            Self {
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
            }
        } else {
            Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
            }
        }
    }
}

/// Parse a `#rrggbb` palette entry, falling back to the terminal default
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let theme = Theme::for_ui(app.dashboard.ui());
    let layout = AppLayout::new(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().fg(theme.fg).bg(theme.bg)),
        frame.area(),
    );

    header::render(frame, app, &theme, layout.header);
    info::render(frame, app, &theme, layout.info);
    dashboard::render(frame, app, &theme, layout.cards);
    status_bar::render(frame, app, &theme, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmReset => dialogs::confirm::render(frame),
        ActiveDialog::EditValue => dialogs::edit_value::render(frame, app),
        ActiveDialog::EditInfo => dialogs::edit_info::render(frame, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::Dashboard;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn draw(app: &App<'_, MemoryStore>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#0ea5e9"), Color::Rgb(0x0e, 0xa5, 0xe9));
        assert_eq!(hex_color("nope"), Color::Reset);
        assert_eq!(hex_color("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn test_render_dashboard() {
        let settings = Settings::default();
        let app = App::new(Dashboard::load(MemoryStore::new()), &settings);

        let screen = draw(&app, 120, 45);

        assert!(screen.contains("Briefly"));
        assert!(screen.contains("REPC Contract cost"));
        assert!(screen.contains("$253,000.00"));
        assert!(screen.contains("CASE-0000"));
    }

    #[test]
    fn test_render_bar_chart_and_dialogs() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);
        app.cycle_chart();
        app.toggle_theme();

        app.open_dialog(ActiveDialog::Help);
        assert!(draw(&app, 100, 40).contains("Keyboard"));

        app.begin_edit_value();
        assert!(draw(&app, 100, 40).contains("Edit Value"));

        app.close_dialog();
        app.begin_edit_info();
        assert!(draw(&app, 100, 40).contains("Client Info"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let settings = Settings::default();
        let mut app = App::new(Dashboard::load(MemoryStore::new()), &settings);
        app.open_dialog(ActiveDialog::ConfirmReset);

        draw(&app, 20, 6);
        assert!(draw(&app, 100, 40).contains("Reset dashboard?"));
    }
}
