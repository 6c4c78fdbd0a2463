//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game except the strategies and
//! the seed: table size, starting deck, supply schedule and end conditions.
//! `GameConfig::new(player_count)` gives the standard game; the `with_*`
//! builders override individual settings.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::MAX_PLAYERS;
use crate::cards::standard::{COPPER, DUCHY, ESTATE, GOLD, KINGDOM, PROVINCE, SILVER};
use crate::cards::{CardId, CardRegistry};

/// Copies of each kingdom action card in the standard supply.
pub const KINGDOM_PILE_SIZE: u32 = 10;

/// Initial supply piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplySchedule {
    piles: Vec<(CardId, u32)>,
}

impl SupplySchedule {
    /// An empty schedule.
    #[must_use]
    pub fn empty() -> Self {
        Self { piles: Vec::new() }
    }

    /// Treasure and victory piles only.
    ///
    /// Copper is counted before the starting decks are dealt out of it:
    /// 60 copies less 7 per player.
    #[must_use]
    pub fn base(player_count: usize) -> Self {
        let dealt = u32::try_from(player_count).map_or(u32::MAX, |n| n.saturating_mul(7));
        let copper = 60u32.saturating_sub(dealt);
        Self::empty()
            .with_pile(COPPER, copper)
            .with_pile(SILVER, 40)
            .with_pile(GOLD, 30)
            .with_pile(ESTATE, 8)
            .with_pile(DUCHY, 8)
            .with_pile(PROVINCE, 8)
    }

    /// Base piles plus every kingdom action card.
    #[must_use]
    pub fn standard(player_count: usize) -> Self {
        KINGDOM
            .iter()
            .fold(Self::base(player_count), |schedule, &card| {
                schedule.with_pile(card, KINGDOM_PILE_SIZE)
            })
    }

    /// Set a pile's size, adding the pile if needed.
    #[must_use]
    pub fn with_pile(mut self, card: CardId, count: u32) -> Self {
        match self.piles.iter_mut().find(|(c, _)| *c == card) {
            Some(pile) => pile.1 = count,
            None => self.piles.push((card, count)),
        }
        self
    }

    /// Drop a pile entirely.
    #[must_use]
    pub fn without(mut self, card: CardId) -> Self {
        self.piles.retain(|(c, _)| *c != card);
        self
    }

    #[must_use]
    pub fn piles(&self) -> &[(CardId, u32)] {
        &self.piles
    }

    /// Scheduled size of one pile, zero if absent.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.piles
            .iter()
            .find(|(c, _)| *c == card)
            .map_or(0, |&(_, n)| n)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.piles.iter().map(|&(_, n)| u64::from(n)).sum()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1-8).
    pub player_count: usize,

    /// Cards dealt at the start of each turn.
    pub hand_size: usize,

    /// Each player's starting cards, all placed in the discard pile.
    pub starting_deck: Vec<(CardId, u32)>,

    /// Initial supply.
    pub supply: SupplySchedule,

    /// Emptying this pile ends the game.
    pub ending_pile: CardId,

    /// Emptying this many piles ends the game.
    pub exhausted_piles_to_end: usize,

    /// The game also ends once every player has taken this many turns.
    pub max_turns: u32,

    /// A turn is cut short after this many applied moves.
    ///
    /// Only reachable by chains that redraw their own action: a lone
    /// village played from a hand with an empty deck and discard is
    /// reshuffled straight back into hand. `Game` reports every cut turn.
    pub max_moves_per_turn: u32,
}

impl GameConfig {
    /// The standard game for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            hand_size: 5,
            starting_deck: vec![(COPPER, 7), (ESTATE, 3)],
            supply: SupplySchedule::standard(player_count),
            ending_pile: PROVINCE,
            exhausted_piles_to_end: 3,
            max_turns: 200,
            max_moves_per_turn: 1024,
        }
    }

    /// Replace the supply schedule.
    #[must_use]
    pub fn with_supply(mut self, supply: SupplySchedule) -> Self {
        self.supply = supply;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_starting_deck(mut self, deck: Vec<(CardId, u32)>) -> Self {
        self.starting_deck = deck;
        self
    }

    #[must_use]
    pub fn with_ending_pile(mut self, card: CardId) -> Self {
        self.ending_pile = card;
        self
    }

    #[must_use]
    pub fn with_exhausted_piles_to_end(mut self, piles: usize) -> Self {
        self.exhausted_piles_to_end = piles;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    #[must_use]
    pub fn with_max_moves_per_turn(mut self, moves: u32) -> Self {
        self.max_moves_per_turn = moves;
        self
    }

    /// A fresh starting discard pile for one player.
    #[must_use]
    pub fn starting_cards(&self) -> Vec<CardId> {
        self.starting_deck
            .iter()
            .flat_map(|&(card, n)| std::iter::repeat(card).take(n as usize))
            .collect()
    }

    /// Cards in play at the start: the supply plus every starting deck.
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        let per_player: u64 = self.starting_deck.iter().map(|&(_, n)| u64::from(n)).sum();
        self.supply
            .total()
            .saturating_add(per_player.saturating_mul(self.player_count as u64))
    }

    /// Check the configuration against a registry.
    pub fn validate(&self, registry: &CardRegistry) -> Result<(), GameError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "player count must be 1-{MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be positive".to_string()));
        }
        if self.max_turns == 0 {
            return Err(GameError::InvalidConfig("turn limit must be positive".to_string()));
        }

        let scheduled = self.supply.piles().iter().map(|&(c, _)| c);
        let dealt = self.starting_deck.iter().map(|&(c, _)| c);
        for card in scheduled.chain(dealt).chain(std::iter::once(self.ending_pile)) {
            registry.card(card)?;
        }

        if !self.supply.piles().iter().any(|&(c, _)| c == self.ending_pile) {
            return Err(GameError::InvalidConfig(format!(
                "ending pile {} is not in the supply",
                registry.name(self.ending_pile)
            )));
        }

        Ok(())
    }
}
