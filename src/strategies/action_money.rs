//! Big Money with a single kingdom action on top.

use crate::cards::standard::{COPPER, GOLD, MINE, SILVER, SMITHY};
use crate::core::{Move, Phase};
use crate::rules::{Decision, DecisionView, Strategy};

use super::big_money::{big_money_pick, single_buy};

/// Plays smithy whenever it can and buys like Big Money, picking up
/// smithies at 4 or 5 gold until it owns `smithies` of them.
#[derive(Clone, Debug)]
pub struct SmithyBigMoney {
    pub smithies: usize,
}

impl Default for SmithyBigMoney {
    fn default() -> Self {
        Self { smithies: 1 }
    }
}

impl SmithyBigMoney {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_smithies(mut self, smithies: usize) -> Self {
        self.smithies = smithies;
        self
    }
}

impl Strategy for SmithyBigMoney {
    fn name(&self) -> &str {
        "smithy-big-money"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        let play = Move::PlayBasicAction(SMITHY);
        if view.turn.phase() == Phase::Action
            && view.turn.contains(SMITHY)
            && view.legal_moves().contains(&play)
        {
            return Decision::Play(play);
        }

        single_buy(view, || {
            let gold = view.gold();
            if (4..=5).contains(&gold) && view.owned(SMITHY) < self.smithies {
                Some(SMITHY)
            } else {
                big_money_pick(view, false)
            }
        })
    }
}

/// Uses mine to upgrade silver to gold (or else copper to silver) and buys
/// like Big Money, picking up one mine at exactly 5 gold.
#[derive(Clone, Copy, Debug, Default)]
pub struct MineBigMoney;

impl Strategy for MineBigMoney {
    fn name(&self) -> &str {
        "mine-big-money"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        if view.turn.phase() == Phase::Action && view.turn.contains(MINE) {
            let upgrade = [(SILVER, GOLD), (COPPER, SILVER)]
                .into_iter()
                .map(|(from, to)| Move::PlayTransformAction { action: MINE, from, to })
                .find(|mv| view.is_legal(mv));
            if let Some(mv) = upgrade {
                return Decision::Play(mv);
            }
        }

        single_buy(view, || {
            if view.gold() == 5 && view.owned(MINE) == 0 {
                Some(MINE)
            } else {
                big_money_pick(view, false)
            }
        })
    }
}
