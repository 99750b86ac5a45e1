//! Status bar: last message on the left, key hints on the right

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, StatusKind};

use super::Theme;

const HINTS: &str = " Space:Toggle  e:Edit  c:Chart  a:Add  ?:Help  q:Quit ";

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let mut spans = Vec::new();

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => theme.accent,
            StatusKind::Warning => Color::Yellow,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::styled(format!(" {}", status.text), Style::default().fg(color)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = HINTS.chars().count();
    let width = usize::from(area.width);
    if left_len + hints_len < width {
        spans.push(Span::raw(" ".repeat(width - left_len - hints_len)));
        spans.push(Span::styled(HINTS, Style::default().fg(theme.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
