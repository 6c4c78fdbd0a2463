//! Hand-built tables for strategy unit tests.

use crate::cards::standard::{COPPER, ESTATE, PROVINCE};
use crate::cards::{CardId, CardRegistry};
use crate::core::{PlayerId, PlayerMap, PlayerState, Supply, SupplySchedule, Trash, TurnState};
use crate::rules::{DecisionView, GameView};

/// A two-player table mid-game, seen by player 0.
pub(crate) struct Table {
    schedule: SupplySchedule,
    supply: Supply,
    trash: Trash,
    players: PlayerMap<PlayerState>,
}

impl Table {
    pub(crate) fn new() -> Self {
        let schedule = SupplySchedule::standard(2);
        let mut starting = vec![COPPER; 7];
        starting.extend([ESTATE; 3]);

        Self {
            supply: Supply::new(schedule.piles().iter().copied()),
            schedule,
            trash: Trash::default(),
            players: PlayerMap::new(2, |_| PlayerState::with_discard(starting.clone())),
        }
    }

    pub(crate) fn with_pile(mut self, card: CardId, count: u32) -> Self {
        self.schedule = self.schedule.with_pile(card, count);
        self.supply = Supply::new(self.schedule.piles().iter().copied());
        self
    }

    pub(crate) fn with_provinces(self, count: u32) -> Self {
        self.with_pile(PROVINCE, count)
    }

    pub(crate) fn with_discard(mut self, player: PlayerId, cards: Vec<CardId>) -> Self {
        self.players[player].discard.extend(cards);
        self
    }

    pub(crate) fn view<'a>(&'a self, turn: &'a TurnState) -> DecisionView<'a> {
        DecisionView {
            game: GameView {
                registry: CardRegistry::standard(),
                supply: &self.supply,
                trash: &self.trash,
                players: &self.players,
            },
            player_id: PlayerId::new(0),
            player: &self.players[PlayerId::new(0)],
            turn,
        }
    }
}
