//! Layout definitions for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum height of one card panel
pub const CARD_HEIGHT: u16 = 12;

/// Top-level regions
pub struct AppLayout {
    pub header: Rect,
    pub info: Rect,
    pub cards: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Client info
                Constraint::Min(40),    // Cards
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            info: body[0],
            cards: body[1],
            status_bar: vertical[2],
        }
    }
}

/// Regions inside one card panel
pub struct CardLayout {
    pub chart: Rect,
    pub legend: Rect,
}

impl CardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        Self {
            chart: chunks[0],
            legend: chunks[1],
        }
    }
}

/// Which cards fit in `height` rows, keeping `selected` visible
pub fn visible_cards(count: usize, selected: usize, height: u16) -> std::ops::Range<usize> {
    let fits = usize::from((height / CARD_HEIGHT).max(1));
    if count <= fits {
        return 0..count;
    }
    let start = selected.saturating_sub(fits - 1).min(count - fits);
    start..start + fits
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_cards_window() {
        assert_eq!(visible_cards(3, 0, 40), 0..3);
        assert_eq!(visible_cards(5, 0, 24), 0..2);
        assert_eq!(visible_cards(5, 3, 24), 2..4);
        assert_eq!(visible_cards(5, 4, 24), 3..5);
        // Tiny terminals still show the selected card
        assert_eq!(visible_cards(5, 2, 3), 2..3);
        assert_eq!(visible_cards(0, 0, 30), 0..0);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let outer = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, outer), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, outer), outer);
    }
}
