//! Uniformly random play, for fuzzing the engine.

use crate::core::GameRng;
use crate::rules::{Decision, DecisionView, Strategy};

/// Picks a uniformly random legal move, stopping early with a fixed
/// probability at each step.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    stop_probability: f64,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Play from an existing stream, typically `Game::fork_rng()`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            stop_probability: 0.1,
        }
    }

    /// Chance of ending the turn while legal moves remain.
    #[must_use]
    pub fn with_stop_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "stop probability must be within [0, 1]"
        );
        self.stop_probability = probability;
        self
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        let moves = view.legal_moves();
        if moves.is_empty() || self.rng.gen_bool(self.stop_probability) {
            return Decision::Done;
        }

        self.rng
            .choose(&moves)
            .map_or(Decision::Done, |&mv| Decision::Play(mv))
    }
}
