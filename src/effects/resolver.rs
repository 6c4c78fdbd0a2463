//! Move resolution - checking and applying moves.
//!
//! `MoveResolver::validate` checks every precondition of a move without
//! touching any state. `MoveResolver::apply` validates first and only then
//! mutates the supply, trash and player piles, returning the successor
//! `TurnState`. A failed precondition is a `ContractViolation`.

use log::trace;

use super::effect::{ActionEffect, BasicEffect};
use crate::cards::{CardId, CardRegistry};
use crate::core::{
    GameError, GameRng, Move, Phase, PlayerId, PlayerState, Supply, Trash, TurnDelta, TurnState,
    Violation,
};

/// Mutable game resources a move may touch.
pub struct MoveContext<'a> {
    pub registry: &'a CardRegistry,
    pub supply: &'a mut Supply,
    pub trash: &'a mut Trash,
    pub player_id: PlayerId,
    pub player: &'a mut PlayerState,
    pub rng: &'a mut GameRng,
}

/// Validates and applies moves.
pub struct MoveResolver;

impl MoveResolver {
    /// Check a move against the current turn without changing anything.
    pub fn validate(
        registry: &CardRegistry,
        supply: &Supply,
        player: PlayerId,
        turn: &TurnState,
        mv: &Move,
    ) -> Result<(), GameError> {
        let fail = |v: Violation| Err(GameError::violation(player, v));

        match *mv {
            Move::Buy(card) => {
                let cost = registry.card(card)?.cost;
                let gold = turn.gold(registry);
                if turn.buys() == 0 {
                    return fail(Violation::NoBuys);
                }
                if !supply.has(card) {
                    return fail(Violation::SupplyExhausted(card));
                }
                if cost > gold {
                    return fail(Violation::Unaffordable { card, cost, gold });
                }
                Ok(())
            }

            Move::PlayBasicAction(action) => {
                match Self::playable(registry, player, turn, action)? {
                    ActionEffect::Basic(_) => Ok(()),
                    ActionEffect::Transform(_) => fail(Violation::WrongEffect(action)),
                }
            }

            Move::PlayTransformAction { action, from, to } => {
                let effect = match Self::playable(registry, player, turn, action)? {
                    ActionEffect::Transform(effect) => effect,
                    ActionEffect::Basic(_) => return fail(Violation::WrongEffect(action)),
                };
                let (from_card, to_card) = (registry.card(from)?, registry.card(to)?);

                let has_source = turn.without_card(action).is_some_and(|rest| rest.contains(from));
                if !has_source {
                    return fail(Violation::NotInHand(from));
                }
                if from_card.kind() != effect.from_kind {
                    return fail(Violation::WrongKind { card: from, expected: effect.from_kind });
                }
                if to_card.kind() != effect.to_kind {
                    return fail(Violation::WrongKind { card: to, expected: effect.to_kind });
                }
                if !supply.has(to) {
                    return fail(Violation::SupplyExhausted(to));
                }
                if to_card.cost > from_card.cost + effect.cost_bonus {
                    return fail(Violation::CostBonusExceeded {
                        to,
                        to_cost: to_card.cost,
                        from_cost: from_card.cost,
                        bonus: effect.cost_bonus,
                    });
                }
                Ok(())
            }
        }
    }

    /// Apply a move, returning the successor turn state.
    pub fn apply(ctx: &mut MoveContext<'_>, turn: &TurnState, mv: &Move) -> Result<TurnState, GameError> {
        Self::validate(ctx.registry, ctx.supply, ctx.player_id, turn, mv)?;
        let player = ctx.player_id;
        let violation = move |v: Violation| GameError::violation(player, v);

        let next = match *mv {
            Move::Buy(card) => {
                ctx.supply.take(card).map_err(violation)?;
                ctx.player.discard.push(card);

                let delta = TurnDelta {
                    buys: -1,
                    gold: -ctx.registry[card].cost,
                    ..TurnDelta::default()
                };
                turn.adjusted(delta)
                    .ok_or_else(|| violation(Violation::NoBuys))?
                    .in_buy_phase()
            }

            Move::PlayBasicAction(action) => match ctx.registry[action].effect {
                Some(ActionEffect::Basic(effect)) => Self::play_basic(ctx, turn, action, effect)?,
                _ => return Err(violation(Violation::WrongEffect(action))),
            },

            Move::PlayTransformAction { action, from, to } => match ctx.registry[action].effect {
                Some(ActionEffect::Transform(_)) => Self::play_transform(ctx, turn, action, from, to)?,
                _ => return Err(violation(Violation::WrongEffect(action))),
            },
        };

        trace!("{} applied {:?}", player, mv);
        Ok(next)
    }

    /// Shared action-play preconditions; returns the card's effect.
    fn playable(
        registry: &CardRegistry,
        player: PlayerId,
        turn: &TurnState,
        action: CardId,
    ) -> Result<ActionEffect, GameError> {
        let fail = |v: Violation| Err(GameError::violation(player, v));

        let Some(effect) = registry.card(action)?.effect else {
            return fail(Violation::NotAnAction(action));
        };
        if turn.phase() != Phase::Action {
            return fail(Violation::WrongPhase);
        }
        if turn.actions() == 0 {
            return fail(Violation::NoActions);
        }
        if !turn.contains(action) {
            return fail(Violation::NotInHand(action));
        }
        Ok(effect)
    }

    /// Remove the action from hand into the discard pile and spend it.
    fn spend_action(
        ctx: &mut MoveContext<'_>,
        turn: &TurnState,
        action: CardId,
        delta: TurnDelta,
    ) -> Result<TurnState, GameError> {
        let player = ctx.player_id;
        let violation = move |v: Violation| GameError::violation(player, v);

        let next = turn
            .without_card(action)
            .ok_or_else(|| violation(Violation::NotInHand(action)))?
            .adjusted(delta)
            .ok_or_else(|| violation(Violation::NoActions))?;
        ctx.player.discard.push(action);
        Ok(next)
    }

    fn play_basic(
        ctx: &mut MoveContext<'_>,
        turn: &TurnState,
        action: CardId,
        effect: BasicEffect,
    ) -> Result<TurnState, GameError> {
        let next = Self::spend_action(ctx, turn, action, effect.delta())?;
        if effect.add_cards == 0 {
            return Ok(next);
        }

        let drawn = ctx.player.draw_cards(effect.add_cards, ctx.rng)?;
        Ok(next.with_cards(drawn))
    }

    fn play_transform(
        ctx: &mut MoveContext<'_>,
        turn: &TurnState,
        action: CardId,
        from: CardId,
        to: CardId,
    ) -> Result<TurnState, GameError> {
        let player = ctx.player_id;
        let violation = move |v: Violation| GameError::violation(player, v);
        let spent = TurnDelta { actions: -1, ..TurnDelta::default() };

        let next = Self::spend_action(ctx, turn, action, spent)?
            .without_card(from)
            .ok_or_else(|| violation(Violation::NotInHand(from)))?;
        ctx.supply.take(to).map_err(violation)?;
        ctx.trash.push(from);

        Ok(next.with_cards([to]))
    }
}
