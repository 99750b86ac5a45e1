//! Card panels: total, chart and legend for each card

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::models::{derive_series, derive_total, legend, Card, ChartKind, SeriesPoint};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::{visible_cards, CardLayout};
use crate::tui::widgets::SegmentBar;

use super::{hex_color, Theme};

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, theme: &Theme, area: Rect) {
    let cards = app.dashboard.cards();
    if cards.is_empty() {
        let empty = Paragraph::new("No cards. Press 'a' to add one.")
            .style(Style::default().fg(theme.muted))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let range = visible_cards(cards.len(), app.selected_card_index, area.height);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(range.clone().map(|_| Constraint::Ratio(1, range.len() as u32)))
        .split(area);

    for (row, index) in rows.iter().zip(range) {
        if let Some(card) = cards.get_index(index) {
            let selected = index == app.selected_card_index;
            render_card(frame, app, theme, card, selected, *row);
        }
    }
}

fn render_card<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<'_, S>,
    theme: &Theme,
    card: &Card,
    selected: bool,
    area: Rect,
) {
    let symbol = app.settings.currency_symbol.as_str();
    let color_mode = app.dashboard.color_mode();
    let total = derive_total(card);

    let border = if selected { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(
            format!(" {} ", card.title),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_top(
            Line::from(format!(" {} · {} ", format_amount(total, symbol), card.chart))
                .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = CardLayout::new(inner);
    let series = derive_series(card, color_mode);

    match card.chart {
        ChartKind::Donut => render_ring(frame, theme, &series, total, symbol, layout.chart),
        ChartKind::Bar => render_bars(frame, theme, &series, layout.chart),
    }

    let focused = if selected {
        app.selected_category()
    } else {
        None
    };
    let lines: Vec<Line> = legend(card, color_mode)
        .into_iter()
        .map(|entry| {
            let cursor = if Some(entry.key) == focused { "›" } else { " " };
            let check = if entry.on { "[x] " } else { "[ ] " };
            let swatch = match entry.color {
                Some(color) => Span::styled("■ ", Style::default().fg(hex_color(color))),
                None => Span::styled("· ", Style::default().fg(theme.muted)),
            };
            let label_style = if entry.on {
                Style::default().fg(theme.fg)
            } else {
                Style::default().fg(theme.muted)
            };
            let mut line = Line::from(vec![
                Span::styled(cursor, Style::default().fg(theme.accent)),
                Span::raw(check),
                swatch,
                Span::styled(format!("{:<12}", entry.label), label_style),
                Span::styled(format_amount(entry.value, symbol), label_style),
            ]);
            if Some(entry.key) == focused {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            line
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.legend);
}

/// Donut stand-in: a proportional ring strip with the total underneath
fn render_ring(
    frame: &mut Frame,
    theme: &Theme,
    series: &[SeriesPoint],
    total: f64,
    symbol: &str,
    area: Rect,
) {
    if series.is_empty() {
        render_empty(frame, theme, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let segments: Vec<_> = series
        .iter()
        .map(|point| (point.value, hex_color(point.color)))
        .collect();
    frame.render_widget(
        SegmentBar::new(&segments).empty_color(theme.muted),
        rows[1].inner(Margin::new(1, 0)),
    );

    let caption = Paragraph::new(vec![Line::from(vec![
        Span::styled("Total ", Style::default().fg(theme.muted)),
        Span::styled(
            format_amount(total, symbol),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(caption, rows[3]);
}

fn render_bars(frame: &mut Frame, theme: &Theme, series: &[SeriesPoint], area: Rect) {
    if series.is_empty() {
        render_empty(frame, theme, area);
        return;
    }

    let count = series.len() as u16;
    let bar_width = (area.width.saturating_sub(count) / count).clamp(1, 10);

    let bars: Vec<Bar> = series
        .iter()
        .map(|point| {
            let color = hex_color(point.color);
            Bar::default()
                .value(point.value.round().max(0.0) as u64)
                .label(Line::from(short_label(&point.name, bar_width)))
                .text_value(compact_amount(point.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.bg).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn render_empty(frame: &mut Frame, theme: &Theme, area: Rect) {
    let empty = Paragraph::new("No active categories")
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}

/// First `width` characters of a label
fn short_label(label: &str, width: u16) -> String {
    label.chars().take(usize::from(width)).collect()
}

/// Amount in k/M units for bar captions
pub fn compact_amount(value: f64) -> String {
    let value = value.max(0.0);
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}
