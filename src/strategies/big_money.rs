//! Buy-only strategies.
//!
//! None of these play actions. Each makes at most one buy per turn and
//! then stops.

use crate::cards::standard::{DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::cards::{CardId, CardKind};
use crate::core::{Move, Phase};
use crate::rules::{Decision, DecisionView, Strategy};

/// Buy `pick()` once per turn, if it is legal.
pub(crate) fn single_buy(view: &DecisionView<'_>, pick: impl FnOnce() -> Option<CardId>) -> Decision {
    if view.turn.phase() == Phase::Buy {
        return Decision::Done;
    }

    match pick() {
        Some(card) if view.can_buy(card) => Decision::Play(Move::Buy(card)),
        _ => Decision::Done,
    }
}

/// The "Big Money" buy table.
///
/// Greens early once the province pile runs low, takes one gold before the
/// first province while the deck is thin, and with `duchy_dance` follows
/// the penultimate province rule.
pub(crate) fn big_money_pick(view: &DecisionView<'_>, duchy_dance: bool) -> Option<CardId> {
    let gold = view.gold();
    let supply = view.supply();
    let provinces = supply.count(PROVINCE);

    if duchy_dance
        && gold > 5
        && provinces == 2
        && supply.has(DUCHY)
        && view.player.score(view.registry()) < view.game.best_score()
    {
        return Some(DUCHY);
    }

    let pick = if gold >= 8 {
        if supply.has(GOLD) && view.owned(GOLD) == 0 && view.owned(SILVER) < 5 {
            GOLD
        } else {
            PROVINCE
        }
    } else if gold >= 6 && provinces <= 4 && supply.has(DUCHY) {
        DUCHY
    } else if gold >= 6 && supply.has(GOLD) {
        GOLD
    } else if gold >= 5 && provinces <= 5 && supply.has(DUCHY) {
        DUCHY
    } else if gold >= 5 && supply.has(SILVER) {
        SILVER
    } else if gold >= 3 && provinces <= 2 && supply.has(ESTATE) {
        ESTATE
    } else if gold >= 3 && supply.has(SILVER) {
        SILVER
    } else if gold >= 2 && provinces <= 3 && supply.has(ESTATE) {
        ESTATE
    } else {
        return None;
    };
    Some(pick)
}

/// Province at 8, gold at 6, silver at 3.
///
/// Below that it buys nothing until the province pile drops under
/// `desperation_threshold`, after which it takes the first affordable of
/// duchy and estate. Not competitive, but a useful sparring partner.
#[derive(Clone, Debug)]
pub struct BigMoneyBasic {
    pub desperation_threshold: u32,
}

impl BigMoneyBasic {
    #[must_use]
    pub fn new(desperation_threshold: u32) -> Self {
        Self { desperation_threshold }
    }
}

impl Strategy for BigMoneyBasic {
    fn name(&self) -> &str {
        "big-money-basic"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        single_buy(view, || {
            let gold = view.gold();
            let supply = view.supply();

            if gold >= 8 {
                Some(PROVINCE)
            } else if gold >= 6 && supply.has(GOLD) {
                Some(GOLD)
            } else if gold >= 3 && supply.has(SILVER) {
                Some(SILVER)
            } else if supply.count(PROVINCE) < self.desperation_threshold {
                [DUCHY, ESTATE]
                    .into_iter()
                    .find(|&c| view.registry()[c].cost <= gold)
            } else {
                None
            }
        })
    }
}

/// Big Money as the community strategy wiki describes it.
#[derive(Clone, Debug, Default)]
pub struct BigMoneyWiki {
    pub duchy_dance: bool,
}

impl BigMoneyWiki {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the penultimate province rule.
    #[must_use]
    pub fn with_duchy_dance(mut self) -> Self {
        self.duchy_dance = true;
        self
    }
}

impl Strategy for BigMoneyWiki {
    fn name(&self) -> &str {
        if self.duchy_dance {
            "big-money-wiki-dance"
        } else {
            "big-money-wiki"
        }
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        single_buy(view, || big_money_pick(view, self.duchy_dance))
    }
}

/// Buys the most expensive affordable treasure, nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreasureOnly;

impl Strategy for TreasureOnly {
    fn name(&self) -> &str {
        "treasure-only"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        single_buy(view, || {
            view.registry()
                .of_kind(CardKind::Treasure)
                .filter(|&(id, _)| view.can_buy(id))
                .max_by_key(|(_, card)| card.cost)
                .map(|(id, _)| id)
        })
    }
}
