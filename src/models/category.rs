//! Cost categories
//!
//! A card holds at most one entry per [`CategoryKey`]. The key set is closed
//! and its declaration order is the display order everywhere.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BrieflyError;

/// The fixed set of cost categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Land,
    Slab,
    Fence,
    Pool,
    Furniture,
    Upgrades,
    Contingency,
}

impl CategoryKey {
    /// All keys in display order
    pub const ALL: [CategoryKey; 7] = [
        Self::Land,
        Self::Slab,
        Self::Fence,
        Self::Pool,
        Self::Furniture,
        Self::Upgrades,
        Self::Contingency,
    ];

    /// The stored (and command-line) name of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Slab => "slab",
            Self::Fence => "fence",
            Self::Pool => "pool",
            Self::Furniture => "furniture",
            Self::Upgrades => "upgrades",
            Self::Contingency => "contingency",
        }
    }

    /// The label a freshly created category carries
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Slab => "Slab",
            Self::Fence => "Fence wall",
            Self::Pool => "Pool",
            Self::Furniture => "Furniture",
            Self::Upgrades => "Upgrades",
            Self::Contingency => "Contingency",
        }
    }

    /// Position of this key in the fixed order
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = BrieflyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                BrieflyError::InvalidArgument(format!(
                    "unknown category '{}' (expected one of: {})",
                    s,
                    Self::ALL
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// A named, toggleable cost line within a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display label
    pub label: String,

    /// Amount in whole currency units
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub value: f64,

    /// Whether the category counts toward the total and the chart
    #[serde(default)]
    pub on: bool,
}

impl Category {
    /// Create a new category
    pub fn new(label: impl Into<String>, value: f64, on: bool) -> Self {
        Self {
            label: label.into(),
            value,
            on,
        }
    }

    /// A copy with `on` flipped
    pub fn toggled(&self) -> Self {
        Self {
            on: !self.on,
            ..self.clone()
        }
    }

    /// A copy with the value replaced by the coerced form of `raw`
    pub fn with_raw_value(&self, raw: &str) -> Self {
        Self {
            value: parse_amount(raw),
            ..self.clone()
        }
    }
}

/// Coerce user input to an amount
///
/// Accepts surrounding whitespace, a leading `$` and `,` separators. Anything
/// that does not parse to a finite, non-negative number becomes 0.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Stored values may be numbers, numeric strings or null
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Null,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) if n.is_finite() && n >= 0.0 => n,
        RawAmount::Number(_) | RawAmount::Null => 0.0,
        RawAmount::Text(s) => parse_amount(&s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_matches_display_order() {
        let names: Vec<_> = CategoryKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["land", "slab", "fence", "pool", "furniture", "upgrades", "contingency"]
        );
        assert!(CategoryKey::Land < CategoryKey::Contingency);
        assert_eq!(CategoryKey::Pool.ordinal(), 3);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("fence".parse::<CategoryKey>().unwrap(), CategoryKey::Fence);
        assert_eq!(" Slab ".parse::<CategoryKey>().unwrap(), CategoryKey::Slab);

        let err = "garage".parse::<CategoryKey>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_key_serializes_lowercase() {
        let json = serde_json::to_string(&CategoryKey::Contingency).unwrap();
        assert_eq!(json, "\"contingency\"");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("18000"), 18000.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("$235,000"), 235000.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
    }

    #[test]
    fn test_toggled_leaves_other_fields() {
        let category = Category::new("Slab", 18000.0, true);
        let toggled = category.toggled();

        assert!(!toggled.on);
        assert_eq!(toggled.label, "Slab");
        assert_eq!(toggled.value, 18000.0);
        assert_eq!(toggled.toggled(), category);
    }

    #[test]
    fn test_with_raw_value_keeps_label_and_flag() {
        let category = Category::new("Slab", 18000.0, true);
        let updated = category.with_raw_value("abc");

        assert_eq!(updated.value, 0.0);
        assert_eq!(updated.label, "Slab");
        assert!(updated.on);
    }

    #[test]
    fn test_lenient_value_deserialization() {
        let from_text: Category =
            serde_json::from_str(r#"{"label": "Pool", "value": "1200", "on": true}"#).unwrap();
        assert_eq!(from_text.value, 1200.0);

        let from_null: Category =
            serde_json::from_str(r#"{"label": "Pool", "value": null, "on": false}"#).unwrap();
        assert_eq!(from_null.value, 0.0);

        let missing: Category = serde_json::from_str(r#"{"label": "Pool"}"#).unwrap();
        assert_eq!(missing.value, 0.0);
        assert!(!missing.on);
    }
}
