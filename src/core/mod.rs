//! Core engine types: seats, RNG, configuration, errors, moves and state.
//!
//! Nothing here runs a game; the `rules` module drives these types through
//! the turn loop.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod turn;

pub use action::{Move, MoveRecord};
pub use config::{GameConfig, SupplySchedule, KINGDOM_PILE_SIZE};
pub use error::{GameError, Violation};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use state::{Drawn, PlayerState, Supply, Trash};
pub use turn::{Phase, TurnDelta, TurnState};
