//! Per-turn state.
//!
//! A `TurnState` is a value: applying a move produces a new one and the old
//! one is dropped. The hand is an `im::Vector`, so producing the successor
//! shares structure with its predecessor instead of copying it.
//!
//! `gold` is never stored. It is recomputed from the hand plus the bonus
//! accumulated by played actions and debited by purchases.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};

/// Turn phase. Only ever moves from `Action` to `Buy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Action,
    Buy,
}

/// Counter changes produced by one move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnDelta {
    pub actions: i32,
    pub buys: i32,
    pub gold: i32,
}

/// Snapshot of the active player's turn.
///
/// ```
/// use deckbuilder_sim::cards::{standard, CardRegistry};
/// use deckbuilder_sim::core::{Phase, TurnState};
///
/// let registry = CardRegistry::standard();
/// let turn = TurnState::deal([standard::COPPER, standard::SILVER, standard::ESTATE]);
///
/// assert_eq!(turn.phase(), Phase::Action);
/// assert_eq!((turn.actions(), turn.buys()), (1, 1));
/// assert_eq!(turn.gold(registry), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    hand: Vector<CardId>,
    phase: Phase,
    actions: u32,
    buys: u32,
    additional_gold: i32,
}

impl TurnState {
    /// Fresh turn: action phase, one action, one buy, no bonus gold.
    pub fn deal(hand: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            phase: Phase::Action,
            actions: 1,
            buys: 1,
            additional_gold: 0,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardId> {
        &self.hand
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn actions(&self) -> u32 {
        self.actions
    }

    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    /// Bonus from played actions minus the cost of purchases so far.
    #[must_use]
    pub fn additional_gold(&self) -> i32 {
        self.additional_gold
    }

    /// Gold available to spend: the hand's treasure plus the bonus.
    #[must_use]
    pub fn gold(&self, registry: &CardRegistry) -> i32 {
        self.hand.iter().map(|&c| registry[c].gold).sum::<i32>() + self.additional_gold
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Copies of `card` in hand.
    #[must_use]
    pub fn count(&self, card: CardId) -> usize {
        self.hand.iter().filter(|&&c| c == card).count()
    }

    // === Successors ===

    /// Successor with one copy of `card` removed, or `None` if absent.
    #[must_use]
    pub fn without_card(&self, card: CardId) -> Option<Self> {
        let pos = self.hand.index_of(&card)?;
        let mut next = self.clone();
        next.hand.remove(pos);
        Some(next)
    }

    /// Successor with `cards` added to the hand.
    #[must_use]
    pub fn with_cards(&self, cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut next = self.clone();
        next.hand.extend(cards);
        next
    }

    /// Successor with counters adjusted, or `None` if a counter would drop
    /// below zero.
    #[must_use]
    pub fn adjusted(&self, delta: TurnDelta) -> Option<Self> {
        let mut next = self.clone();
        next.actions = self.actions.checked_add_signed(delta.actions)?;
        next.buys = self.buys.checked_add_signed(delta.buys)?;
        next.additional_gold = self.additional_gold.checked_add(delta.gold)?;
        Some(next)
    }

    /// Successor in the buy phase. Idempotent once there.
    #[must_use]
    pub fn in_buy_phase(&self) -> Self {
        let mut next = self.clone();
        next.phase = Phase::Buy;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard::{COPPER, ESTATE, GOLD, SMITHY};

    fn registry() -> &'static CardRegistry {
        CardRegistry::standard()
    }

    #[test]
    fn test_deal_defaults() {
        let turn = TurnState::deal([COPPER, COPPER, ESTATE]);

        assert_eq!(turn.hand().len(), 3);
        assert_eq!(turn.phase(), Phase::Action);
        assert_eq!(turn.additional_gold(), 0);
        assert_eq!(turn.gold(registry()), 2);
    }

    #[test]
    fn test_without_card_removes_one_copy() {
        let turn = TurnState::deal([COPPER, COPPER, SMITHY]);
        let next = turn.without_card(COPPER).unwrap();

        assert_eq!(next.count(COPPER), 1);
        assert_eq!(turn.count(COPPER), 2, "original is untouched");
        assert!(next.without_card(GOLD).is_none());
    }

    #[test]
    fn test_adjusted_rejects_negative_counters() {
        let turn = TurnState::deal([COPPER]);

        let spent = turn.adjusted(TurnDelta { actions: -1, ..TurnDelta::default() }).unwrap();
        assert_eq!(spent.actions(), 0);
        assert!(spent.adjusted(TurnDelta { actions: -1, ..TurnDelta::default() }).is_none());

        let debited = turn.adjusted(TurnDelta { buys: -1, gold: -1, ..TurnDelta::default() }).unwrap();
        assert_eq!(debited.buys(), 0);
        assert_eq!(debited.additional_gold(), -1);
        assert_eq!(debited.gold(registry()), 0);
    }

    #[test]
    fn test_phase_is_one_way() {
        let turn = TurnState::deal([GOLD]).in_buy_phase();
        assert_eq!(turn.phase(), Phase::Buy);
        assert_eq!(turn.in_buy_phase().phase(), Phase::Buy);
        assert!(Phase::Action < Phase::Buy);
    }

    #[test]
    fn test_turn_state_serialization() {
        let turn = TurnState::deal([COPPER, GOLD]).in_buy_phase();
        let json = serde_json::to_string(&turn).unwrap();
        let back: TurnState = serde_json::from_str(&json).unwrap();

        assert_eq!(turn, back);
    }
}
