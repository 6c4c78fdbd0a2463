//! Reference strategies for the standard card set.
//!
//! ## Strategies
//!
//! - `BigMoneyBasic`: province/gold/silver by gold, greens when desperate
//! - `BigMoneyWiki`: the community Big Money table, optional duchy dance
//! - `TreasureOnly`: most expensive affordable treasure
//! - `SmithyBigMoney`, `MineBigMoney`: Big Money plus one action
//! - `RandomStrategy`: random legal moves, for fuzzing
//!
//! All of them refer to cards by the standard IDs and assume the standard
//! registry.

pub mod action_money;
pub mod big_money;
pub mod random;

#[cfg(test)]
mod testing;

pub use action_money::{MineBigMoney, SmithyBigMoney};
pub use big_money::{BigMoneyBasic, BigMoneyWiki, TreasureOnly};
pub use random::RandomStrategy;
