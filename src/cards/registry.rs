//! Card registry: the catalog every game reads from.
//!
//! A registry is filled once and then only read. `CardId`s are assigned in
//! registration order, so lookup by ID is a slice index and lookup by name
//! is a single hash lookup.

use std::ops::Index;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardKind};
use crate::core::GameError;

/// Registry of card definitions.
///
/// ```
/// use deckbuilder_sim::cards::{Card, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// let copper = registry.register(Card::treasure("copper", 0, 1));
///
/// assert_eq!(registry.lookup("copper").unwrap(), copper);
/// assert_eq!(registry[copper].gold, 1);
/// assert!(registry.lookup("platinum").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition and return its ID.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: Card) -> CardId {
        if self.by_name.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }

        let id = CardId::new(self.cards.len() as u16);
        self.by_name.insert(card.name.clone(), id);
        self.cards.push(card);
        id
    }

    /// Find a card's ID by name.
    pub fn lookup(&self, name: &str) -> Result<CardId, GameError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::UnknownCard(name.to_string()))
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Get a card definition by ID, failing with `UnknownCard` for foreign IDs.
    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.get(id).ok_or_else(|| GameError::UnknownCard(id.to_string()))
    }

    /// Display name for an ID, `"?"` if unregistered.
    #[must_use]
    pub fn name(&self, id: CardId) -> &str {
        self.get(id).map_or("?", |c| c.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(CardId, &Card)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId::new(i as u16), c))
    }

    /// Cards of one kind, in registration order.
    pub fn of_kind(&self, kind: CardKind) -> impl Iterator<Item = (CardId, &Card)> {
        self.iter().filter(move |(_, c)| c.kind() == kind)
    }
}

impl Index<CardId> for CardRegistry {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.cards[id.index()]
    }
}
