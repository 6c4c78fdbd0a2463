//! Batch experiments: many seeded games between the same strategies.

use itertools::Itertools;
use log::info;

use crate::core::{GameConfig, GameError};
use crate::rules::{run_game, Game, Strategy};

/// Configuration for a batch of games.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Games per batch (per seating order for balanced runs).
    pub games: usize,

    /// Seed of game 0; game `i` uses `seed_offset + i`.
    pub seed_offset: u64,

    pub game_config: GameConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
            game_config: GameConfig::new(2),
        }
    }
}

impl ExperimentConfig {
    #[must_use]
    pub fn new(game_config: GameConfig) -> Self {
        Self {
            game_config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Seed for game `i`.
    #[must_use]
    pub fn seed(&self, i: usize) -> u64 {
        self.seed_offset.wrapping_add(i as u64)
    }

    /// Play game `i` with freshly built strategies.
    pub fn play(
        &self,
        i: usize,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Game<'static>, GameError> {
        run_game(strategies, self.game_config.clone(), self.seed(i))
    }
}

/// Final score of every seat, one row per game.
pub fn collect_scores(
    config: &ExperimentConfig,
    factory: impl Fn() -> Vec<Box<dyn Strategy>>,
) -> Result<Vec<Vec<i32>>, GameError> {
    let scores = (0..config.games)
        .map(|i| config.play(i, factory()).map(|game| game.scores()))
        .collect::<Result<Vec<_>, _>>()?;

    info!("collected scores for {} games", scores.len());
    Ok(scores)
}

/// Wins per seat. A draw credits every tied winner.
pub fn count_wins(
    config: &ExperimentConfig,
    factory: impl Fn() -> Vec<Box<dyn Strategy>>,
) -> Result<Vec<u64>, GameError> {
    let mut wins = vec![0u64; config.game_config.player_count];

    for i in 0..config.games {
        let game = config.play(i, factory())?;
        for winner in game.winners() {
            wins[winner.index()] += 1;
        }
    }

    info!("wins over {} games: {:?}", config.games, wins);
    Ok(wins)
}

/// Wins per strategy, with every seating order played `config.games` times.
///
/// Wins are credited back to the strategy's index in the factory's output.
/// Every permutation replays the same seeds, so seat effects cancel out.
pub fn count_wins_balanced(
    config: &ExperimentConfig,
    factory: impl Fn() -> Vec<Box<dyn Strategy>>,
) -> Result<Vec<u64>, GameError> {
    let n = config.game_config.player_count;
    let mut wins = vec![0u64; n];

    for perm in (0..n).permutations(n) {
        // perm[seat] is the strategy sitting in that seat.
        let mut seat_of = vec![0usize; n];
        for (seat, &strategy) in perm.iter().enumerate() {
            seat_of[strategy] = seat;
        }

        for i in 0..config.games {
            let mut seated: Vec<_> = factory().into_iter().enumerate().collect();
            if seated.len() != n {
                return Err(GameError::InvalidConfig(format!(
                    "{} strategies for {} players",
                    seated.len(),
                    n
                )));
            }
            seated.sort_by_key(|&(k, _)| seat_of[k]);

            let game = config.play(i, seated.into_iter().map(|(_, s)| s).collect())?;
            for winner in game.winners() {
                wins[perm[winner.index()]] += 1;
            }
        }
    }

    info!("balanced wins over {} seatings: {:?}", (1..=n).product::<usize>(), wins);
    Ok(wins)
}
