//! Reset confirmation
//!
//! Lists what a reset throws away before asking for y/n.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const CLEARED: [&str; 3] = [
    "every budget card and its values",
    "the client info",
    "theme, tab and edit mode",
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(46, CLEARED.len() as u16 + 7, frame.area());
    frame.render_widget(Clear, area);

    let warn = Style::default().fg(Color::Yellow);
    let block = Block::default()
        .title(" Reset dashboard? ")
        .title_style(warn.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(warn);

    let mut lines = vec![Line::from(" This clears:")];
    lines.extend(
        CLEARED
            .iter()
            .map(|item| Line::from(vec![Span::styled("  • ", warn), Span::raw(*item)])),
    );
    lines.push(Line::from(Span::styled(
        " The sample cards come back.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" reset   "),
        Span::styled("n/Esc", Style::default().fg(Color::Green)),
        Span::raw(" keep"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
