//! Persistent game state: player piles, the supply, and the trash.
//!
//! ## PlayerState
//!
//! One per seat, owned by the engine for the whole game. Between turns a
//! player's cards are split between `deck` (draw pile, front is the top)
//! and `discard`; during a turn some are also in the `TurnState` hand.
//!
//! ## Supply
//!
//! Remaining copies per card type. Only scheduled cards are tracked;
//! asking for an untracked card reports zero without creating a pile.

use log::trace;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Violation};
use super::rng::GameRng;
use crate::cards::{CardId, CardRegistry};

/// Cards drawn by one draw call. Hands are rarely larger than eight.
pub type Drawn = SmallVec<[CardId; 8]>;

/// A player's piles and turn counter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Draw pile; index 0 is the top.
    pub deck: Vec<CardId>,

    /// Discard pile; order is irrelevant.
    pub discard: Vec<CardId>,

    /// Turns taken so far.
    pub num_turns: u32,
}

impl PlayerState {
    /// A player whose starting cards all sit in the discard pile.
    #[must_use]
    pub fn with_discard(discard: Vec<CardId>) -> Self {
        Self {
            deck: Vec::new(),
            discard,
            num_turns: 0,
        }
    }

    /// Draw exactly `n` cards from the top of the deck.
    ///
    /// If the deck holds fewer than `n`, the discard pile is shuffled and
    /// placed under it first. Fails with `DeckExhaustion` when deck and
    /// discard together still hold fewer than `n`; the reshuffle has
    /// happened by then but no card has left the piles.
    pub fn draw_cards(&mut self, n: usize, rng: &mut GameRng) -> Result<Drawn, GameError> {
        if self.deck.len() < n {
            rng.shuffle(&mut self.discard);
            self.deck.append(&mut self.discard);
            trace!("reshuffled discard, deck now {} cards", self.deck.len());
        }

        if self.deck.len() < n {
            return Err(GameError::DeckExhaustion {
                requested: n,
                available: self.deck.len(),
            });
        }

        Ok(self.deck.drain(..n).collect())
    }

    /// Cards in deck plus discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Copies of `card` in deck plus discard.
    #[must_use]
    pub fn count(&self, card: CardId) -> usize {
        self.cards().filter(|&&c| c == card).count()
    }

    /// Every card in deck and discard.
    pub fn cards(&self) -> impl Iterator<Item = &CardId> {
        self.deck.iter().chain(self.discard.iter())
    }

    /// Total victory points over deck and discard.
    ///
    /// The hand is not counted; scoring happens between turns when the
    /// hand is empty.
    #[must_use]
    pub fn score(&self, registry: &CardRegistry) -> i32 {
        self.cards().map(|&c| registry[c].victory).sum()
    }
}

/// Remaining copies of each purchasable card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    piles: FxHashMap<CardId, u32>,
}

impl Supply {
    /// Create a supply from `(card, count)` pairs.
    ///
    /// Repeated cards add to the same pile.
    pub fn new(piles: impl IntoIterator<Item = (CardId, u32)>) -> Self {
        let mut supply = Self::default();
        for (card, count) in piles {
            *supply.piles.entry(card).or_insert(0) += count;
        }
        supply
    }

    /// Remaining copies; zero for cards without a pile.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.piles.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has(&self, card: CardId) -> bool {
        self.count(card) > 0
    }

    /// Whether the card has a pile at all, empty or not.
    #[must_use]
    pub fn is_tracked(&self, card: CardId) -> bool {
        self.piles.contains_key(&card)
    }

    /// Remove one copy.
    pub fn take(&mut self, card: CardId) -> Result<(), Violation> {
        match self.piles.get_mut(&card) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(Violation::SupplyExhausted(card)),
        }
    }

    /// Number of tracked piles with no copies left.
    #[must_use]
    pub fn exhausted_piles(&self) -> usize {
        self.piles.values().filter(|&&n| n == 0).count()
    }

    /// Copies left across all piles.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.piles.values().map(|&n| u64::from(n)).sum()
    }

    /// Tracked piles sorted by card ID.
    #[must_use]
    pub fn piles(&self) -> Vec<(CardId, u32)> {
        let mut piles: Vec<_> = self.piles.iter().map(|(&c, &n)| (c, n)).collect();
        piles.sort_unstable();
        piles
    }
}

/// Cards removed from the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trash {
    cards: Vec<CardId>,
}

impl Trash {
    pub fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
