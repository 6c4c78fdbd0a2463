//! Moves a strategy can propose, and the record the engine keeps of them.
//!
//! Moves carry `CardId`s only; the engine resolves them against the
//! registry, the supply and the current `TurnState`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// A proposed player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Buy one copy of a card from the supply into the discard pile.
    Buy(CardId),

    /// Play an action card whose effect only adjusts counters and draws.
    PlayBasicAction(CardId),

    /// Play an action card that swaps a card in hand for a supply card.
    PlayTransformAction {
        action: CardId,
        from: CardId,
        to: CardId,
    },
}

impl Move {
    /// The action card a play move spends, if any.
    #[must_use]
    pub fn action_card(&self) -> Option<CardId> {
        match *self {
            Move::Buy(_) => None,
            Move::PlayBasicAction(action) | Move::PlayTransformAction { action, .. } => Some(action),
        }
    }

    #[must_use]
    pub fn is_buy(&self) -> bool {
        matches!(self, Move::Buy(_))
    }
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Seat that made the move.
    pub player: PlayerId,

    /// That seat's turn number (1-based).
    pub turn: u32,

    /// Position within the turn (0-based).
    pub sequence: u32,

    pub mv: Move,
}
