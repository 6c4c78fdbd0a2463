//! The strategy contract.
//!
//! Each turn the engine repeatedly builds a `DecisionView` and calls
//! `Strategy::decide`. A strategy answers with one `Decision`: either a move,
//! which the engine validates and applies before asking again with the
//! successor turn state, or `Done`, which ends the turn.
//!
//! Views only hand out shared references. A strategy cannot change game
//! state; it can only propose moves.

use smallvec::SmallVec;

use crate::cards::{CardId, CardRegistry};
use crate::core::{Move, PlayerId, PlayerMap, PlayerState, Supply, Trash, TurnState};
use crate::effects::{ActionEffect, MoveResolver};

/// Read-only view of the shared game state.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub registry: &'a CardRegistry,
    pub supply: &'a Supply,
    pub trash: &'a Trash,
    pub players: &'a PlayerMap<PlayerState>,
}

impl GameView<'_> {
    /// Every player's current score.
    #[must_use]
    pub fn scores(&self) -> Vec<i32> {
        self.players.values().map(|p| p.score(self.registry)).collect()
    }

    /// Highest current score at the table.
    #[must_use]
    pub fn best_score(&self) -> i32 {
        self.scores().into_iter().max().unwrap_or(0)
    }
}

/// Everything a strategy sees for one decision.
#[derive(Clone, Copy, Debug)]
pub struct DecisionView<'a> {
    pub game: GameView<'a>,
    pub player_id: PlayerId,
    pub player: &'a PlayerState,
    pub turn: &'a TurnState,
}

impl<'a> DecisionView<'a> {
    #[must_use]
    pub fn registry(&self) -> &'a CardRegistry {
        self.game.registry
    }

    #[must_use]
    pub fn supply(&self) -> &'a Supply {
        self.game.supply
    }

    /// Gold available this turn.
    #[must_use]
    pub fn gold(&self) -> i32 {
        self.turn.gold(self.game.registry)
    }

    /// Copies of `card` owned by the acting player, hand included.
    #[must_use]
    pub fn owned(&self, card: CardId) -> usize {
        self.player.count(card) + self.turn.count(card)
    }

    /// Whether `mv` would pass the engine's checks right now.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        MoveResolver::validate(self.game.registry, self.game.supply, self.player_id, self.turn, mv)
            .is_ok()
    }

    /// Whether buying `card` is legal right now.
    #[must_use]
    pub fn can_buy(&self, card: CardId) -> bool {
        self.is_legal(&Move::Buy(card))
    }

    /// Every move the engine would accept now.
    ///
    /// Plays whose draw could not be satisfied even after reshuffling are
    /// left out, so choosing from this list never aborts the game.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let registry = self.game.registry;
        let mut moves = Vec::new();

        let mut actions: SmallVec<[CardId; 8]> = self
            .turn
            .hand()
            .iter()
            .copied()
            .filter(|&c| registry[c].is_action())
            .collect();
        actions.sort_unstable();
        actions.dedup();

        for action in actions {
            let Some(effect) = registry[action].effect else {
                continue;
            };
            if let ActionEffect::Basic(basic) = effect {
                // The played card itself is in the discard by the time the draw happens.
                if self.player.card_count() + 1 < basic.add_cards {
                    continue;
                }
            }
            moves.extend(
                effect
                    .moves(action, self.turn, self.game.supply, registry)
                    .into_iter()
                    .filter(|mv| self.is_legal(mv)),
            );
        }

        for (card, _) in self.game.supply.piles() {
            if self.can_buy(card) {
                moves.push(Move::Buy(card));
            }
        }

        moves
    }
}

/// A strategy's answer for one decision step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Move),
    Done,
}

/// Decision logic for one seat.
///
/// The engine calls `decide` once per step and feeds the successor turn
/// state back in through the next view. Anything a strategy wants to
/// remember within a turn lives in its own fields.
pub trait Strategy {
    /// Name used in logs and experiment reports.
    fn name(&self) -> &str;

    /// Choose the next move, or stop.
    fn decide(&mut self, view: &DecisionView<'_>) -> Decision;
}
