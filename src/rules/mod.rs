//! Game engine and the strategy contract.
//!
//! The engine owns all mutable state and calls into `Strategy` for every
//! decision. Strategies never see anything but read-only views.

pub mod engine;
pub mod strategy;

pub use engine::{run_game, winners_from, EndReason, Game, GameResult, TurnOutcome};
pub use strategy::{Decision, DecisionView, GameView, Strategy};
