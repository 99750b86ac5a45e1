//! Client info panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::CaseInfoField;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

use super::Theme;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let info = app.dashboard.info();

    let block = Block::default()
        .title(" Client ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let mut lines = Vec::new();
    for field in CaseInfoField::ALL {
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            info.get(field).to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    let hint = if app.dashboard.ui().edit {
        "i: edit details"
    } else {
        "locked (E to unlock)"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.muted))));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
