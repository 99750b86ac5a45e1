//! Dialog for typing a category amount

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Value ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let card = app
        .edit_value
        .card_id
        .as_ref()
        .and_then(|id| app.dashboard.card(id.as_str()))
        .map(|card| card.title.as_str())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(card, Style::default().fg(Color::DarkGray))),
        rows[0],
    );

    frame.render_widget(&app.edit_value.input, rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ])),
        rows[3],
    );
}
