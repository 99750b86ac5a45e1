//! Client-info form: every field listed, the focused one editable

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::CaseInfoField;
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let fields = CaseInfoField::ALL;
    let area = centered_rect_fixed(56, fields.len() as u16 + 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Client Info ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); fields.len()];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = app.edit_info.field();
    for (field, row) in fields.iter().zip(rows.iter()) {
        if *field == focused {
            frame.render_widget(&app.edit_info.input, *row);
        } else {
            render_field(frame, field.label(), app.dashboard.info().get(*field), *row);
        }
    }

    if let Some(footer) = rows.last() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
                Span::raw(" Next  "),
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" Save  "),
                Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
                Span::raw(" Close"),
            ])),
            *footer,
        );
    }
}

fn render_field(frame: &mut Frame, label: &str, value: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
