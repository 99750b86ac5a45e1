//! Header: title, navigation tabs, theme and edit indicators

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::models::KNOWN_TABS;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

use super::Theme;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let ui = app.dashboard.ui();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(24),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        " Briefly",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    // A custom tab name highlights nothing
    let selected = KNOWN_TABS
        .iter()
        .position(|tab| *tab == ui.tab)
        .unwrap_or(KNOWN_TABS.len());
    let tabs = Tabs::new(
        KNOWN_TABS
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab)),
    )
    .select(selected)
    .style(Style::default().fg(theme.muted))
    .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[1]);

    let edit = if ui.edit { "edit on" } else { "locked" };
    let indicators = Paragraph::new(Line::from(vec![
        Span::styled(ui.theme_name(), Style::default().fg(theme.fg)),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        Span::styled(edit, Style::default().fg(theme.fg)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(indicators, chunks[2]);
}
