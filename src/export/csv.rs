//! CSV export of the per-card category breakdown

use std::io::Write;

use serde::Serialize;

use crate::error::{BrieflyError, BrieflyResult};
use crate::models::{derive_total, CardCollection};

/// One category of one card
#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    card_id: &'a str,
    card_title: &'a str,
    category: &'static str,
    label: &'a str,
    value: f64,
    on: bool,
    /// Fraction of the card's active total, 0 when inactive
    share: f64,
}

/// Write one row per category of every card
pub fn export_breakdown_csv<W: Write>(cards: &CardCollection, writer: W) -> BrieflyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for card in cards {
        let total = derive_total(card);
        for (key, category) in card.ordered_categories() {
            let share = if category.on && total > 0.0 {
                category.value / total
            } else {
                0.0
            };
            csv_writer
                .serialize(BreakdownRow {
                    card_id: card.id.as_str(),
                    card_title: &card.title,
                    category: key.as_str(),
                    label: &category.label,
                    value: category.value,
                    on: category.on,
                    share,
                })
                .map_err(|e| BrieflyError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| BrieflyError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_rows() {
        let mut buffer = Vec::new();
        export_breakdown_csv(&CardCollection::defaults(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "card_id,card_title,category,label,value,on,share");
        // 3 cards x 7 categories
        assert_eq!(lines.len(), 22);
        assert!(lines[1].starts_with("repc,REPC Contract cost,land,Land,235000"));
        assert!(lines[3].ends_with(",false,0.0"));
    }

    #[test]
    fn test_shares_of_active_categories_sum_to_one() {
        let mut buffer = Vec::new();
        export_breakdown_csv(&CardCollection::defaults(), &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let sum: f64 = reader
            .records()
            .map(|record| record.unwrap())
            .filter(|record| &record[0] == "budget2")
            .map(|record| record[6].parse::<f64>().unwrap())
            .sum();

        assert!((sum - 1.0).abs() < 1e-9);
    }
}
