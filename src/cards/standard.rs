//! The standard card set.
//!
//! Six base cards (three treasures, three victory cards) plus a small
//! kingdom of action cards. The IDs below match registration order in
//! `build_standard`.

use std::sync::OnceLock;

use super::definition::{Card, CardId, CardKind};
use super::registry::CardRegistry;
use crate::effects::{ActionEffect, BasicEffect, TransformEffect};

pub const COPPER: CardId = CardId::new(0);
pub const SILVER: CardId = CardId::new(1);
pub const GOLD: CardId = CardId::new(2);
pub const ESTATE: CardId = CardId::new(3);
pub const DUCHY: CardId = CardId::new(4);
pub const PROVINCE: CardId = CardId::new(5);
pub const VILLAGE: CardId = CardId::new(6);
pub const WOODCUTTER: CardId = CardId::new(7);
pub const SMITHY: CardId = CardId::new(8);
pub const FESTIVAL: CardId = CardId::new(9);
pub const LABORATORY: CardId = CardId::new(10);
pub const MARKET: CardId = CardId::new(11);
pub const MINE: CardId = CardId::new(12);

/// Kingdom action cards, in registration order.
pub const KINGDOM: [CardId; 7] = [VILLAGE, WOODCUTTER, SMITHY, FESTIVAL, LABORATORY, MARKET, MINE];

/// Extra cost a mine may gain over the treasure it trashes.
pub const MINE_COST_BONUS: i32 = 3;

/// Build a fresh copy of the standard registry.
#[must_use]
pub fn build_standard() -> CardRegistry {
    let mut registry = CardRegistry::new();

    registry.register(Card::treasure("copper", 0, 1));
    registry.register(Card::treasure("silver", 3, 2));
    registry.register(Card::treasure("gold", 6, 3));
    registry.register(Card::victory("estate", 2, 1));
    registry.register(Card::victory("duchy", 5, 3));
    registry.register(Card::victory("province", 8, 6));

    let basic = |effect: BasicEffect| ActionEffect::Basic(effect);
    registry.register(Card::action("village", 3, basic(BasicEffect::cards(1).with_actions(2))));
    registry.register(Card::action("woodcutter", 3, basic(BasicEffect::buys(1).with_gold(2))));
    registry.register(Card::action("smithy", 4, basic(BasicEffect::cards(3))));
    registry.register(Card::action(
        "festival",
        5,
        basic(BasicEffect::actions(2).with_buys(1).with_gold(2)),
    ));
    registry.register(Card::action("laboratory", 5, basic(BasicEffect::cards(2).with_actions(1))));
    registry.register(Card::action(
        "market",
        5,
        basic(BasicEffect::cards(1).with_actions(1).with_buys(1).with_gold(1)),
    ));
    registry.register(Card::action(
        "mine",
        5,
        ActionEffect::Transform(TransformEffect::new(
            CardKind::Treasure,
            CardKind::Treasure,
            MINE_COST_BONUS,
        )),
    ));

    registry
}

impl CardRegistry {
    /// The process-wide standard registry, built on first use.
    pub fn standard() -> &'static CardRegistry {
        static STANDARD: OnceLock<CardRegistry> = OnceLock::new();
        STANDARD.get_or_init(build_standard)
    }
}
