//! Chart-ready data derived from a card
//!
//! Everything here is a pure function of a card snapshot. Calling these on
//! every redraw is safe: nothing is cached and nothing is mutated.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::category::CategoryKey;

/// Fixed chart palette, cycled when there are more entries than colors
pub const PALETTE: [&str; 7] = [
    "#0ea5e9", "#22c55e", "#f59e0b", "#ef4444", "#8b5cf6", "#14b8a6", "#fb7185",
];

/// How palette colors are assigned to series entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// By position among the active categories; toggling one category
    /// shifts the colors of the ones after it
    #[default]
    Position,
    /// By the category's place among the categories present on the card,
    /// on or off; colors never shift when toggling
    ByKey,
}

/// One slice of a donut or one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub key: CategoryKey,
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

/// One row of a card's legend, active or not
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub key: CategoryKey,
    pub label: String,
    pub value: f64,
    pub on: bool,
    /// Color the entry has in the chart; `None` when it is not charted and
    /// has no stable color
    pub color: Option<&'static str>,
}

fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Color of `key` in by-key mode
fn present_color(card: &Card, key: CategoryKey) -> &'static str {
    let position = card
        .ordered_categories()
        .position(|(present, _)| present == key)
        .unwrap_or(key.ordinal());
    palette_color(position)
}

/// Active categories in key order, mapped to display tuples
pub fn derive_series(card: &Card, mode: ColorMode) -> Vec<SeriesPoint> {
    card.active_categories()
        .enumerate()
        .map(|(position, (key, category))| SeriesPoint {
            key,
            name: category.label.clone(),
            value: category.value,
            color: match mode {
                ColorMode::Position => palette_color(position),
                ColorMode::ByKey => present_color(card, key),
            },
        })
        .collect()
}

/// Sum of values over active categories only
pub fn derive_total(card: &Card) -> f64 {
    card.active_categories()
        .map(|(_, category)| category.value)
        .sum()
}

/// Every present category with the color it currently charts with
pub fn legend(card: &Card, mode: ColorMode) -> Vec<LegendEntry> {
    let series = derive_series(card, mode);

    card.ordered_categories()
        .map(|(key, category)| {
            let color = match mode {
                ColorMode::Position => series
                    .iter()
                    .find(|point| point.key == key)
                    .map(|point| point.color),
                ColorMode::ByKey => Some(present_color(card, key)),
            };
            LegendEntry {
                key,
                label: category.label.clone(),
                value: category.value,
                on: category.on,
                color,
            }
        })
        .collect()
}
