//! # deckbuilder-sim
//!
//! A simulator for a small deck-building card game, built for pitting
//! scripted strategies against each other over many seeded games.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns State**: Supply, trash and player piles change only
//!    inside the move resolver. Strategies see read-only views.
//!
//! 2. **Step-Function Decisions**: A strategy is asked for one move at a
//!    time and gets the successor `TurnState` back through the next view.
//!
//! 3. **Closed Effects**: Action cards carry one of a fixed set of effect
//!    variants, and a single resolver dispatches on it.
//!
//! 4. **Reproducible**: Every shuffle comes from a seeded ChaCha8 stream.
//!    Same seed and strategies, same game.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors, moves and state
//! - `cards`: Card definitions, the registry and the standard set
//! - `effects`: Action effects and the move resolver
//! - `rules`: The `Strategy` contract and the `Game` engine
//! - `strategies`: Reference strategies
//! - `experiments`: Batch drivers over many seeded games
//!
//! ## Example
//!
//! ```
//! use deckbuilder_sim::{run_game, BigMoneyWiki, GameConfig, SmithyBigMoney};
//!
//! let game = run_game(
//!     vec![Box::new(BigMoneyWiki::new()), Box::new(SmithyBigMoney::new())],
//!     GameConfig::new(2),
//!     7,
//! )
//! .unwrap();
//!
//! println!("scores {:?}, winners {:?}", game.scores(), game.winners());
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod strategies;
pub mod experiments;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, Move, MoveRecord, Phase, PlayerId, PlayerMap, PlayerState,
    Supply, SupplySchedule, Trash, TurnState, Violation,
};

pub use crate::cards::{Card, CardId, CardKind, CardRegistry};

pub use crate::effects::{ActionEffect, BasicEffect, MoveResolver, TransformEffect};

pub use crate::rules::{
    run_game, winners_from, Decision, DecisionView, EndReason, Game, GameResult, GameView, Strategy,
    TurnOutcome,
};

pub use crate::strategies::{
    BigMoneyBasic, BigMoneyWiki, MineBigMoney, RandomStrategy, SmithyBigMoney, TreasureOnly,
};

pub use crate::experiments::{collect_scores, count_wins, count_wins_balanced, ExperimentConfig};
