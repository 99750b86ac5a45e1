//! Budget cards
//!
//! A card is a titled group of cost categories rendered as one chart with one
//! total. Cards are treated as immutable snapshots: every change returns a new
//! card.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use super::category::{Category, CategoryKey};
use crate::error::{BrieflyError, BrieflyResult};

/// Last millisecond value handed out by [`CardId::generate`]
static LAST_GENERATED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Identifier of a card
///
/// Built-in cards carry short names (`repc`, `budget2`); cards created at
/// runtime are `card_<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh time-derived identifier
    ///
    /// Strictly increasing within a process, so two calls in the same
    /// millisecond still produce different ids.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_GENERATED_MILLIS.load(Ordering::SeqCst);
        loop {
            let next = if now > last { now } else { last + 1 };
            match LAST_GENERATED_MILLIS.compare_exchange(
                last,
                next,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Self(format!("card_{}", next)),
                Err(actual) => last = actual,
            }
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How a card is charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Donut,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donut => "donut",
            Self::Bar => "bar",
        }
    }

    /// The other chart kind
    pub fn flipped(&self) -> Self {
        match self {
            Self::Donut => Self::Bar,
            Self::Bar => Self::Donut,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = BrieflyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "donut" => Ok(Self::Donut),
            "bar" => Ok(Self::Bar),
            _ => Err(BrieflyError::InvalidArgument(format!(
                "unknown chart kind '{}' (expected donut or bar)",
                s
            ))),
        }
    }
}

/// A titled group of cost categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, fixed at creation
    pub id: CardId,

    /// Card title
    pub title: String,

    /// Chart kind
    #[serde(default, deserialize_with = "deserialize_chart_kind")]
    pub chart: ChartKind,

    /// Categories by key; iteration follows the fixed key order
    #[serde(default, deserialize_with = "deserialize_known_categories")]
    pub categories: BTreeMap<CategoryKey, Category>,
}

impl Card {
    /// Create a card with no categories
    pub fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            chart: ChartKind::default(),
            categories: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add a category
    pub fn with_category(mut self, key: CategoryKey, value: f64, on: bool) -> Self {
        self.categories
            .insert(key, Category::new(key.default_label(), value, on));
        self
    }

    /// Look up a category
    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.get(&key)
    }

    /// Present categories paired with their keys, in display order
    pub fn ordered_categories(&self) -> impl Iterator<Item = (CategoryKey, &Category)> {
        self.categories.iter().map(|(key, category)| (*key, category))
    }

    /// Present categories that are switched on, in display order
    pub fn active_categories(&self) -> impl Iterator<Item = (CategoryKey, &Category)> {
        self.ordered_categories().filter(|(_, category)| category.on)
    }

    /// A copy with one category replaced by `update(category)`
    pub fn map_category<F>(&self, key: CategoryKey, update: F) -> BrieflyResult<Card>
    where
        F: FnOnce(&Category) -> Category,
    {
        let current = self
            .categories
            .get(&key)
            .ok_or_else(|| BrieflyError::category_not_found(format!("{}/{}", self.id, key)))?;

        let mut next = self.clone();
        next.categories.insert(key, update(current));
        Ok(next)
    }

    /// A copy with a different chart kind
    pub fn with_chart(&self, chart: ChartKind) -> Card {
        Card {
            chart,
            ..self.clone()
        }
    }

    /// A copy with a different title
    pub fn with_title(&self, title: &str) -> BrieflyResult<Card> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BrieflyError::InvalidArgument(
                "card title cannot be empty".into(),
            ));
        }
        Ok(Card {
            title: title.to_string(),
            ..self.clone()
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Fall back to the default chart for anything that is not a known kind
fn deserialize_chart_kind<'de, D>(deserializer: D) -> Result<ChartKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    match raw.as_str().map(str::parse::<ChartKind>) {
        Some(Ok(kind)) => Ok(kind),
        _ => {
            tracing::warn!(chart = %raw, "unknown chart kind in stored card, using donut");
            Ok(ChartKind::default())
        }
    }
}

/// Drop entries whose key is not a known category instead of failing the card
fn deserialize_known_categories<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<CategoryKey, Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Category> = HashMap::deserialize(deserializer)?;
    let mut categories = BTreeMap::new();

    for (name, category) in raw {
        match name.parse::<CategoryKey>() {
            Ok(key) => {
                categories.insert(key, category);
            }
            Err(_) => {
                tracing::warn!(category = %name, "ignoring unknown category in stored card");
            }
        }
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card::new(CardId::new("sample"), "Sample")
            .with_category(CategoryKey::Land, 235000.0, true)
            .with_category(CategoryKey::Slab, 18000.0, true)
            .with_category(CategoryKey::Fence, 12000.0, false)
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: Vec<_> = (0..50).map(|_| CardId::generate()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();

        assert_eq!(deduped.len(), ids.len());
        assert!(ids.iter().all(|id| id.as_str().starts_with("card_")));
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("donut".parse::<ChartKind>().unwrap(), ChartKind::Donut);
        assert_eq!("BAR".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert!("pie".parse::<ChartKind>().unwrap_err().is_invalid_argument());
        assert_eq!(ChartKind::Donut.flipped(), ChartKind::Bar);
    }

    #[test]
    fn test_ordered_categories_follow_key_order() {
        let card = Card::new(CardId::new("x"), "X")
            .with_category(CategoryKey::Contingency, 1.0, true)
            .with_category(CategoryKey::Land, 2.0, true)
            .with_category(CategoryKey::Pool, 3.0, false);

        let keys: Vec<_> = card.ordered_categories().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![CategoryKey::Land, CategoryKey::Pool, CategoryKey::Contingency]
        );

        let active: Vec<_> = card.active_categories().map(|(k, _)| k).collect();
        assert_eq!(active, vec![CategoryKey::Land, CategoryKey::Contingency]);
    }

    #[test]
    fn test_map_category_missing_key() {
        let card = sample_card();
        let err = card
            .map_category(CategoryKey::Pool, Category::toggled)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_with_title_rejects_blank() {
        let card = sample_card();
        assert!(card.with_title("   ").is_err());
        assert_eq!(card.with_title(" Lot 7 ").unwrap().title, "Lot 7");
    }

    #[test]
    fn test_deserialize_drops_unknown_categories() {
        let json = r#"{
            "id": "repc",
            "title": "REPC Contract cost",
            "chart": "bar",
            "categories": {
                "land": { "label": "Land", "value": 235000, "on": true },
                "garage": { "label": "Garage", "value": 9000, "on": true }
            }
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.chart, ChartKind::Bar);
        assert_eq!(card.categories.len(), 1);
        assert!(card.category(CategoryKey::Land).is_some());
    }

    #[test]
    fn test_deserialize_unknown_chart_falls_back_to_donut() {
        let json = r#"{
            "id": "budget2",
            "title": "Budget 2 cost",
            "chart": "pie",
            "categories": {
                "slab": { "label": "Slab", "value": 19000, "on": true }
            }
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.chart, ChartKind::Donut);
        assert_eq!(card.title, "Budget 2 cost");

        let numeric: Card =
            serde_json::from_str(r#"{"id": "x", "title": "X", "chart": 3}"#).unwrap();
        assert_eq!(numeric.chart, ChartKind::Donut);
    }

    #[test]
    fn test_serialized_shape() {
        let card = sample_card();
        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(value["id"], "sample");
        assert_eq!(value["chart"], "donut");
        assert_eq!(value["categories"]["fence"]["label"], "Fence wall");
        assert_eq!(value["categories"]["fence"]["on"], false);
    }
}
