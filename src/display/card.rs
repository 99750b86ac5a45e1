//! Card display formatting
//!
//! Cards are listed as a table with their active totals; a single card is
//! shown with its full legend.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::money::format_amount;
use crate::models::{derive_total, legend, Card, CardCollection, ColorMode};

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Chart")]
    chart: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct LegendRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "On")]
    on: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format every card as one table row
pub fn format_card_list(cards: &CardCollection, symbol: &str) -> String {
    if cards.is_empty() {
        return "No cards found.\n\nRun 'briefly card add' to create one.".to_string();
    }

    let rows: Vec<CardRow> = cards
        .iter()
        .map(|card| CardRow {
            id: card.id.to_string(),
            title: card.title.clone(),
            chart: card.chart.to_string(),
            active: format!(
                "{}/{}",
                card.active_categories().count(),
                card.categories.len()
            ),
            total: format_amount(derive_total(card), symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format one card with its legend
pub fn format_card_details(card: &Card, color_mode: ColorMode, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", card.title));
    output.push_str(&format!("  ID:    {}\n", card.id));
    output.push_str(&format!("  Chart: {}\n", card.chart));
    output.push_str(&format!(
        "  Total: {}\n\n",
        format_amount(derive_total(card), symbol)
    ));

    let rows: Vec<LegendRow> = legend(card, color_mode)
        .into_iter()
        .map(|entry| LegendRow {
            key: entry.key.to_string(),
            label: entry.label,
            value: format_amount(entry.value, symbol),
            on: if entry.on { "[x]" } else { "[ ]" }.to_string(),
            color: entry.color.unwrap_or("-").to_string(),
        })
        .collect();

    if rows.is_empty() {
        output.push_str("(no categories)\n");
    } else {
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output
}
