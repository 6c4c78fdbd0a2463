//! Batch drivers for comparing strategies over many seeded games.

pub mod runner;

pub use runner::{collect_scores, count_wins, count_wins_balanced, ExperimentConfig};
