//! Engine errors.
//!
//! Every error is fatal to the game that raised it: a strategy that proposes
//! an illegal move has a bug, and a deck that cannot supply a draw means the
//! configuration cannot sustain play. Nothing in the engine retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CardId, CardKind};

/// The precondition a proposed move failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Violation {
    #[error("no buys remaining")]
    NoBuys,

    #[error("no actions remaining")]
    NoActions,

    #[error("actions can only be played during the action phase")]
    WrongPhase,

    #[error("{0} is not in hand")]
    NotInHand(CardId),

    #[error("supply pile for {0} is empty")]
    SupplyExhausted(CardId),

    #[error("{card} costs {cost} but only {gold} gold is available")]
    Unaffordable { card: CardId, cost: i32, gold: i32 },

    #[error("{to} costs {to_cost}, more than {from_cost} + {bonus}")]
    CostBonusExceeded {
        to: CardId,
        to_cost: i32,
        from_cost: i32,
        bonus: i32,
    },

    #[error("{0} is not an action card")]
    NotAnAction(CardId),

    #[error("{0} has a different effect than the move requires")]
    WrongEffect(CardId),

    #[error("{card} is not a {expected:?} card")]
    WrongKind { card: CardId, expected: CardKind },
}

/// Fatal simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("{player} proposed an illegal move: {violation}")]
    ContractViolation {
        player: PlayerId,
        violation: Violation,
    },

    #[error("cannot draw {requested} cards, only {available} left after reshuffling")]
    DeckExhaustion { requested: usize, available: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Wrap a failed precondition with the seat that caused it.
    #[must_use]
    pub fn violation(player: PlayerId, violation: Violation) -> Self {
        Self::ContractViolation { player, violation }
    }

    /// True for errors caused by a strategy's move.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}
