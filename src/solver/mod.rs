//! Guess suggestion for Bulls and Cows
//!
//! Strategies score candidate guesses by how they partition the remaining codes.

mod engine;
pub mod partition;
pub mod strategy;

pub use engine::{EVALUATION_BUDGET, Solver};
pub use partition::{GuessMetrics, calculate_metrics};
pub use strategy::{
    EntropyStrategy, FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Strategy,
    StrategyType,
};
