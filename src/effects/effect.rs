//! Action effects.
//!
//! Every action card carries exactly one `ActionEffect`. The set is closed:
//! a `Basic` effect adjusts the turn's counters and draws cards, a
//! `Transform` effect swaps a card in hand for a pricier one from the
//! supply. The `MoveResolver` dispatches on the variant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, CardKind, CardRegistry};
use crate::core::{Move, Supply, TurnDelta, TurnState};

/// Candidate moves for one action card.
pub type PlayMoves = SmallVec<[Move; 4]>;

/// Counter and draw bonuses granted when played.
///
/// ```
/// use deckbuilder_sim::effects::BasicEffect;
///
/// let market = BasicEffect::cards(1).with_actions(1).with_buys(1).with_gold(1);
/// assert_eq!(market.add_cards, 1);
/// assert_eq!(market.add_gold, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicEffect {
    pub add_actions: u32,
    pub add_buys: u32,
    pub add_gold: i32,
    pub add_cards: usize,
}

impl BasicEffect {
    #[must_use]
    pub fn cards(n: usize) -> Self {
        Self { add_cards: n, ..Self::default() }
    }

    #[must_use]
    pub fn actions(n: u32) -> Self {
        Self { add_actions: n, ..Self::default() }
    }

    #[must_use]
    pub fn buys(n: u32) -> Self {
        Self { add_buys: n, ..Self::default() }
    }

    #[must_use]
    pub fn with_actions(mut self, n: u32) -> Self {
        self.add_actions = n;
        self
    }

    #[must_use]
    pub fn with_buys(mut self, n: u32) -> Self {
        self.add_buys = n;
        self
    }

    #[must_use]
    pub fn with_gold(mut self, gold: i32) -> Self {
        self.add_gold = gold;
        self
    }

    /// Counter changes after the played action itself is spent.
    #[must_use]
    pub fn delta(&self) -> TurnDelta {
        TurnDelta {
            actions: self.add_actions as i32 - 1,
            buys: self.add_buys as i32,
            gold: self.add_gold,
        }
    }
}

/// Trade a card in hand for a supply card costing at most `cost_bonus` more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformEffect {
    /// Kind the card given up must have.
    pub from_kind: CardKind,

    /// Kind the card gained must have.
    pub to_kind: CardKind,

    pub cost_bonus: i32,
}

impl TransformEffect {
    #[must_use]
    pub fn new(from_kind: CardKind, to_kind: CardKind, cost_bonus: i32) -> Self {
        Self {
            from_kind,
            to_kind,
            cost_bonus,
        }
    }

    /// Whether `to` may replace `from` under the cost limit.
    #[must_use]
    pub fn allows(&self, registry: &CardRegistry, from: CardId, to: CardId) -> bool {
        let (from, to) = (&registry[from], &registry[to]);
        from.kind() == self.from_kind
            && to.kind() == self.to_kind
            && to.cost <= from.cost + self.cost_bonus
    }
}

/// What an action card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEffect {
    Basic(BasicEffect),
    Transform(TransformEffect),
}

impl ActionEffect {
    /// Every move playing `action` could take from this turn state.
    ///
    /// Pure: enumerates shapes only and checks the effect's own card
    /// constraints. Turn-level preconditions (phase, remaining actions,
    /// the action being in hand) are left to the resolver.
    #[must_use]
    pub fn moves(
        &self,
        action: CardId,
        turn: &TurnState,
        supply: &Supply,
        registry: &CardRegistry,
    ) -> PlayMoves {
        match self {
            ActionEffect::Basic(_) => smallvec::smallvec![Move::PlayBasicAction(action)],
            ActionEffect::Transform(effect) => {
                let Some(rest) = turn.without_card(action) else {
                    return PlayMoves::new();
                };

                let mut sources: SmallVec<[CardId; 8]> = rest.hand().iter().copied().collect();
                sources.sort_unstable();
                sources.dedup();

                let mut moves = PlayMoves::new();
                for from in sources {
                    for (to, _) in registry.of_kind(effect.to_kind) {
                        if supply.has(to) && effect.allows(registry, from, to) {
                            moves.push(Move::PlayTransformAction { action, from, to });
                        }
                    }
                }
                moves
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard::{COPPER, ESTATE, GOLD, MINE, SILVER, SMITHY};
    use crate::core::SupplySchedule;

    fn supply() -> Supply {
        Supply::new(SupplySchedule::standard(2).piles().iter().copied())
    }

    fn mine_effect() -> TransformEffect {
        match CardRegistry::standard()[MINE].effect {
            Some(ActionEffect::Transform(effect)) => effect,
            other => panic!("mine should transform, got {other:?}"),
        }
    }

    #[test]
    fn test_basic_delta_spends_the_action() {
        let village = BasicEffect::cards(1).with_actions(2);
        assert_eq!(village.delta(), TurnDelta { actions: 1, buys: 0, gold: 0 });

        let smithy = BasicEffect::cards(3);
        assert_eq!(smithy.delta().actions, -1);
    }

    #[test]
    fn test_transform_cost_limit() {
        let registry = CardRegistry::standard();
        let mine = mine_effect();

        assert!(mine.allows(registry, COPPER, SILVER));
        assert!(mine.allows(registry, SILVER, GOLD));
        assert!(!mine.allows(registry, COPPER, GOLD), "6 > 0 + 3");
        assert!(!mine.allows(registry, ESTATE, SILVER), "source must be a treasure");
    }

    #[test]
    fn test_basic_moves() {
        let registry = CardRegistry::standard();
        let turn = TurnState::deal([SMITHY, COPPER]);
        let effect = registry[SMITHY].effect.unwrap();

        let moves = effect.moves(SMITHY, &turn, &supply(), registry);
        assert_eq!(moves.as_slice(), &[Move::PlayBasicAction(SMITHY)]);
    }

    #[test]
    fn test_transform_moves_enumerate_pairs() {
        let registry = CardRegistry::standard();
        let turn = TurnState::deal([MINE, COPPER, COPPER, SILVER, ESTATE]);
        let effect = registry[MINE].effect.unwrap();

        let moves = effect.moves(MINE, &turn, &supply(), registry);

        let pairs: Vec<_> = moves
            .iter()
            .map(|m| match *m {
                Move::PlayTransformAction { from, to, .. } => (from, to),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                (COPPER, COPPER),
                (COPPER, SILVER),
                (SILVER, COPPER),
                (SILVER, SILVER),
                (SILVER, GOLD),
            ]
        );
    }

    #[test]
    fn test_transform_moves_respect_supply() {
        let registry = CardRegistry::standard();
        let turn = TurnState::deal([MINE, SILVER]);
        let effect = registry[MINE].effect.unwrap();
        let supply = Supply::new([(COPPER, 1), (SILVER, 1), (GOLD, 0)]);

        let moves = effect.moves(MINE, &turn, &supply, registry);
        assert!(moves
            .iter()
            .all(|m| !matches!(m, Move::PlayTransformAction { to, .. } if *to == GOLD)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_transform_moves_need_action_in_hand() {
        let registry = CardRegistry::standard();
        let turn = TurnState::deal([COPPER]);
        let effect = registry[MINE].effect.unwrap();

        assert!(effect.moves(MINE, &turn, &supply(), registry).is_empty());
    }
}
