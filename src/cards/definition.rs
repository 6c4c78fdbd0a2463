//! Card definitions - immutable card data.
//!
//! A `Card` describes a card type ("silver", "smithy"), never a physical
//! copy. Piles, hands and moves hold `CardId`s that index into the
//! `CardRegistry`; the registry owns the only copy of each definition.

use serde::{Deserialize, Serialize};

use crate::effects::ActionEffect;

/// Identifier of a card type: a dense index into its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the registry index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Broad role of a card, derived from what it confers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Has an effect when played.
    Action,
    /// Contributes gold while held.
    Treasure,
    /// Contributes victory points while owned.
    Victory,
}

/// Static card definition.
///
/// ```
/// use deckbuilder_sim::cards::{Card, CardKind};
///
/// let silver = Card::treasure("silver", 3, 2);
/// assert_eq!(silver.kind(), CardKind::Treasure);
/// assert_eq!(silver.victory, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique name within a registry.
    pub name: String,

    /// Price in gold.
    pub cost: i32,

    /// Gold contributed while in hand.
    pub gold: i32,

    /// Victory points contributed while owned.
    pub victory: i32,

    /// What playing the card does. `None` for non-action cards.
    pub effect: Option<ActionEffect>,
}

impl Card {
    fn new(name: impl Into<String>, cost: i32, gold: i32, victory: i32) -> Self {
        assert!(cost >= 0, "card cost must be non-negative");
        assert!(gold >= 0, "card gold must be non-negative");
        assert!(victory >= 0, "card victory must be non-negative");

        Self {
            name: name.into(),
            cost,
            gold,
            victory,
            effect: None,
        }
    }

    /// A card that only contributes gold.
    #[must_use]
    pub fn treasure(name: impl Into<String>, cost: i32, gold: i32) -> Self {
        Self::new(name, cost, gold, 0)
    }

    /// A card that only contributes victory points.
    #[must_use]
    pub fn victory(name: impl Into<String>, cost: i32, victory: i32) -> Self {
        Self::new(name, cost, 0, victory)
    }

    /// A card with an effect when played.
    #[must_use]
    pub fn action(name: impl Into<String>, cost: i32, effect: ActionEffect) -> Self {
        Self::new(name, cost, 0, 0).with_effect(effect)
    }

    /// Attach an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: ActionEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        if self.effect.is_some() {
            CardKind::Action
        } else if self.gold > 0 {
            CardKind::Treasure
        } else {
            CardKind::Victory
        }
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.effect.is_some()
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.kind() == CardKind::Treasure
    }
}
