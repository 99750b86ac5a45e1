//! Proportional segmented bar, used as the terminal rendering of a donut

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}, widgets::Widget};

/// Split `width` cells among `values` in proportion
///
/// Uses largest remainders so the widths always add up to `width` when any
/// value is positive. All-zero input yields all-zero widths.
pub fn segment_widths(values: &[f64], width: u16) -> Vec<u16> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || width == 0 {
        return vec![0; values.len()];
    }

    let exact: Vec<f64> = values
        .iter()
        .map(|v| v.max(0.0) / total * f64::from(width))
        .collect();
    let mut widths: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();

    let assigned: u16 = widths.iter().sum();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| {
        let ra = exact[*a] - exact[*a].floor();
        let rb = exact[*b] - exact[*b].floor();
        rb.total_cmp(&ra)
    });
    for index in order.into_iter().take(usize::from(width.saturating_sub(assigned))) {
        widths[index] += 1;
    }

    widths
}

/// Stacked horizontal bar filling its whole area
pub struct SegmentBar<'a> {
    segments: &'a [(f64, Color)],
    empty_color: Color,
}

impl<'a> SegmentBar<'a> {
    pub fn new(segments: &'a [(f64, Color)]) -> Self {
        Self {
            segments,
            empty_color: Color::DarkGray,
        }
    }

    pub fn empty_color(mut self, color: Color) -> Self {
        self.empty_color = color;
        self
    }
}

impl Widget for SegmentBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let values: Vec<f64> = self.segments.iter().map(|(v, _)| *v).collect();
        let widths = segment_widths(&values, area.width);

        if widths.iter().all(|w| *w == 0) {
            for y in area.top()..area.bottom() {
                buf.set_string(
                    area.x,
                    y,
                    "░".repeat(usize::from(area.width)),
                    Style::default().fg(self.empty_color),
                );
            }
            return;
        }

        let mut x = area.x;
        for ((_, color), width) in self.segments.iter().zip(widths) {
            if width == 0 {
                continue;
            }
            for y in area.top()..area.bottom() {
                buf.set_string(x, y, "█".repeat(usize::from(width)), Style::default().fg(*color));
            }
            x += width;
        }
    }
}
