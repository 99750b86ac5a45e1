//! Keyboard reference

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const KEYS: [(&str, &str); 14] = [
    ("j/k ↑/↓", "Select category"),
    ("Tab/S-Tab", "Next/previous card"),
    ("Space", "Include or exclude category"),
    ("e", "Edit category value"),
    ("c", "Switch donut/bar chart"),
    ("a", "Add a card"),
    ("i", "Edit client info"),
    ("t", "Toggle light/dark theme"),
    ("E", "Toggle edit mode"),
    ("1-4", "Select navigation tab"),
    ("R", "Reset everything"),
    ("?", "Show this help"),
    ("q", "Quit"),
    ("Esc", "Close dialog"),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(48, KEYS.len() as u16 + 4, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    lines.extend(KEYS.iter().map(|(key, action)| key_line(key, action)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Green)),
        Span::raw(action),
    ])
}
