//! The card collection and its update operations
//!
//! Stored as a JSON object keyed by card id. Insertion order is kept across
//! load and save so cards display in the order they were created.
//!
//! Every operation takes `&self` and returns a new collection. Unknown card
//! ids and category keys are reported as [`BrieflyError::NotFound`]; callers
//! that want the tolerant dashboard behavior treat that as a no-op.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::card::{Card, CardId, ChartKind};
use super::category::{Category, CategoryKey};
use crate::error::{BrieflyError, BrieflyResult};

/// Id of the card new cards are cloned from
pub const TEMPLATE_CARD_ID: &str = "repc";

/// Title given to cards created at runtime
pub const NEW_CARD_TITLE: &str = "Dashboard card";

/// Ordered mapping from card id to card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// An empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// The three sample cards shown on first run
    pub fn defaults() -> Self {
        use CategoryKey::*;

        let repc = Card::new(CardId::new("repc"), "REPC Contract cost")
            .with_category(Land, 235000.0, true)
            .with_category(Slab, 18000.0, true)
            .with_category(Fence, 12000.0, false)
            .with_category(Pool, 0.0, false)
            .with_category(Furniture, 20000.0, false)
            .with_category(Upgrades, 15000.0, false)
            .with_category(Contingency, 0.0, false);

        let budget2 = Card::new(CardId::new("budget2"), "Budget 2 cost")
            .with_category(Land, 235000.0, true)
            .with_category(Slab, 19000.0, true)
            .with_category(Fence, 14000.0, true)
            .with_category(Pool, 0.0, false)
            .with_category(Furniture, 22000.0, false)
            .with_category(Upgrades, 23000.0, true)
            .with_category(Contingency, 0.0, false);

        let budget3 = Card::new(CardId::new("budget3"), "Budget 3 cost")
            .with_category(Land, 235000.0, true)
            .with_category(Slab, 17000.0, true)
            .with_category(Fence, 8000.0, false)
            .with_category(Pool, 0.0, false)
            .with_category(Furniture, 12000.0, true)
            .with_category(Upgrades, 10000.0, true)
            .with_category(Contingency, 0.0, false);

        Self {
            cards: vec![repc, budget2, budget3],
        }
    }

    /// The card new cards are cloned from
    ///
    /// Always the built-in default, never the user's edited copy.
    pub fn template() -> Card {
        Self::defaults()
            .cards
            .into_iter()
            .find(|card| card.id.as_str() == TEMPLATE_CARD_ID)
            .unwrap_or_else(|| Card::new(CardId::new(TEMPLATE_CARD_ID), NEW_CARD_TITLE))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in display order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in display order
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id.clone()).collect()
    }

    /// Card at a display position
    pub fn get_index(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Look up a card by id
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert a card, replacing any card with the same id in place
    pub fn upsert(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    /// Look up a card or report it missing
    pub fn require(&self, id: &str) -> BrieflyResult<&Card> {
        self.get(id).ok_or_else(|| BrieflyError::card_not_found(id))
    }

    /// A copy with one card replaced by `update(card)`
    fn map_card<F>(&self, id: &str, update: F) -> BrieflyResult<CardCollection>
    where
        F: FnOnce(&Card) -> BrieflyResult<Card>,
    {
        let next_card = update(self.require(id)?)?;
        let mut next = self.clone();
        next.upsert(next_card);
        Ok(next)
    }

    /// Flip `on` for one category of one card
    pub fn toggle_category(&self, id: &str, key: CategoryKey) -> BrieflyResult<CardCollection> {
        self.map_card(id, |card| card.map_category(key, Category::toggled))
    }

    /// Store the coerced amount of `raw` in one category of one card
    pub fn set_category_value(
        &self,
        id: &str,
        key: CategoryKey,
        raw: &str,
    ) -> BrieflyResult<CardCollection> {
        self.map_card(id, |card| {
            card.map_category(key, |category| category.with_raw_value(raw))
        })
    }

    /// Switch how one card is charted
    pub fn set_chart_kind(&self, id: &str, kind: ChartKind) -> BrieflyResult<CardCollection> {
        self.map_card(id, |card| Ok(card.with_chart(kind)))
    }

    /// Give one card a new title
    pub fn rename_card(&self, id: &str, title: &str) -> BrieflyResult<CardCollection> {
        self.map_card(id, |card| card.with_title(title))
    }

    /// Append a copy of the template card under a fresh id
    pub fn add_card(&self) -> (CardCollection, CardId) {
        let mut id = CardId::generate();
        while self.contains(id.as_str()) {
            id = CardId::generate();
        }

        let mut card = Self::template();
        card.id = id.clone();
        card.title = NEW_CARD_TITLE.to_string();

        let mut next = self.clone();
        next.cards.push(card);
        (next, id)
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Serialize for CardCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cards.len()))?;
        for card in &self.cards {
            map.serialize_entry(card.id.as_str(), card)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CardCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = CardCollection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of card id to card")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut collection = CardCollection::new();

        while let Some((key, mut card)) = access.next_entry::<String, Card>()? {
            // The map key is authoritative for identity
            if card.id.as_str() != key {
                tracing::warn!(key = %key, id = %card.id, "card id differs from its map key");
                card.id = CardId::new(key);
            }
            collection.upsert(card);
        }

        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::derive_total;

    fn scenario_card() -> CardCollection {
        let card = Card::new(CardId::new("scenario"), "Scenario")
            .with_category(CategoryKey::Land, 235000.0, true)
            .with_category(CategoryKey::Slab, 18000.0, true)
            .with_category(CategoryKey::Fence, 12000.0, false);
        let mut collection = CardCollection::new();
        collection.upsert(card);
        collection
    }

    #[test]
    fn test_defaults() {
        let cards = CardCollection::defaults();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.ids(),
            vec![
                CardId::new("repc"),
                CardId::new("budget2"),
                CardId::new("budget3")
            ]
        );

        let repc = cards.get("repc").unwrap();
        assert_eq!(repc.categories.len(), 7);
        assert_eq!(repc.chart, ChartKind::Donut);
        assert_eq!(derive_total(repc), 253000.0);
    }

    #[test]
    fn test_toggle_and_value_scenario() {
        let cards = scenario_card();
        assert_eq!(derive_total(cards.get("scenario").unwrap()), 253000.0);

        let cards = cards.toggle_category("scenario", CategoryKey::Fence).unwrap();
        assert_eq!(derive_total(cards.get("scenario").unwrap()), 265000.0);

        let cards = cards
            .set_category_value("scenario", CategoryKey::Slab, "abc")
            .unwrap();
        let card = cards.get("scenario").unwrap();
        assert_eq!(card.category(CategoryKey::Slab).unwrap().value, 0.0);
        assert_eq!(derive_total(card), 247000.0);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let original = CardCollection::defaults();
        for key in CategoryKey::ALL {
            let twice = original
                .toggle_category("budget2", key)
                .and_then(|c| c.toggle_category("budget2", key))
                .unwrap();
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn test_operations_do_not_touch_the_input_snapshot() {
        let original = CardCollection::defaults();
        let _ = original.toggle_category("repc", CategoryKey::Pool).unwrap();
        let _ = original.set_chart_kind("repc", ChartKind::Bar).unwrap();
        assert_eq!(original, CardCollection::defaults());
    }

    #[test]
    fn test_unknown_card_or_key_is_not_found() {
        let cards = scenario_card();

        let err = cards.toggle_category("nope", CategoryKey::Land).unwrap_err();
        assert!(err.is_not_found());

        let err = cards
            .toggle_category("scenario", CategoryKey::Pool)
            .unwrap_err();
        assert!(err.is_not_found());

        let err = cards
            .set_category_value("nope", CategoryKey::Land, "5")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_chart_kind() {
        let cards = CardCollection::defaults();
        let cards = cards.set_chart_kind("budget3", ChartKind::Bar).unwrap();
        assert_eq!(cards.get("budget3").unwrap().chart, ChartKind::Bar);
        assert_eq!(cards.get("repc").unwrap().chart, ChartKind::Donut);

        let err = cards.set_chart_kind("nope", ChartKind::Bar).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rename_card() {
        let cards = CardCollection::defaults().rename_card("budget2", "Lot 12").unwrap();
        assert_eq!(cards.get("budget2").unwrap().title, "Lot 12");
        assert_eq!(cards.ids()[1], CardId::new("budget2"));
    }

    #[test]
    fn test_add_card() {
        let cards = CardCollection::defaults();
        let (next, id) = cards.add_card();

        assert_eq!(next.len(), cards.len() + 1);
        assert!(!cards.contains(id.as_str()));
        assert!(!["repc", "budget2", "budget3"].contains(&id.as_str()));

        let added = next.get(id.as_str()).unwrap();
        assert_eq!(added.title, NEW_CARD_TITLE);
        assert_eq!(added.categories, cards.get("repc").unwrap().categories);
        assert_eq!(next.ids().last(), Some(&id));
    }

    #[test]
    fn test_add_card_uses_pristine_template() {
        let edited = CardCollection::defaults()
            .set_category_value("repc", CategoryKey::Land, "1")
            .unwrap();
        let (next, id) = edited.add_card();

        let added = next.get(id.as_str()).unwrap();
        assert_eq!(added.category(CategoryKey::Land).unwrap().value, 235000.0);
    }

    #[test]
    fn test_consecutive_adds_get_distinct_ids() {
        let (once, first) = CardCollection::defaults().add_card();
        let (twice, second) = once.add_card();
        assert_ne!(first, second);
        assert_eq!(twice.len(), 5);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let (cards, _) = CardCollection::defaults().add_card();
        let cards = cards.toggle_category("budget3", CategoryKey::Pool).unwrap();

        let json = serde_json::to_string(&cards).unwrap();
        let loaded: CardCollection = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, cards);
        assert_eq!(loaded.ids(), cards.ids());
    }

    #[test]
    fn test_map_key_is_authoritative() {
        let json = r#"{
            "budget9": { "id": "other", "title": "T", "chart": "donut", "categories": {} }
        }"#;
        let loaded: CardCollection = serde_json::from_str(json).unwrap();
        assert!(loaded.contains("budget9"));
        assert!(!loaded.contains("other"));
    }
}
