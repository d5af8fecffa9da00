//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::partition::{calculate_entropy, calculate_max_partition};
use crate::core::SecretCode;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::sync::{Mutex, PoisonError};

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from `guess_pool` given the remaining `candidates`
    ///
    /// Returns `None` if nothing can be selected.
    fn select_guess(&self, guess_pool: &[SecretCode], candidates: &[SecretCode])
    -> Option<SecretCode>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Entropy maximization (default)
    Entropy(EntropyStrategy),
    /// Worst-case minimization
    Minimax(MinimaxStrategy),
    /// Random remaining candidate
    Random(RandomStrategy),
    /// First remaining candidate
    First(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        guess_pool: &[SecretCode],
        candidates: &[SecretCode],
    ) -> Option<SecretCode> {
        match self {
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
            Self::First(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "minimax", "random", "first".
    /// Defaults to entropy if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy::default()),
            "first" => Self::First(FirstCandidateStrategy),
            _ => Self::Entropy(EntropyStrategy),
        }
    }

    /// Like `from_name`, but a random strategy draws from `rng`
    ///
    /// A seeded `rng` makes random play reproducible.
    #[must_use]
    pub fn from_name_with_rng(name: &str, rng: StdRng) -> Self {
        match Self::from_name(name) {
            Self::Random(_) => Self::Random(RandomStrategy::new(rng)),
            other => other,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
            Self::First(_) => "first",
        }
    }
}

/// Pick the highest-valued guess from the pool
///
/// Equal values prefer guesses that are still candidates (they can win
/// outright), then the earliest pool position, so the result does not depend
/// on how rayon splits the work.
fn select_best<F>(
    guess_pool: &[SecretCode],
    candidates: &[SecretCode],
    evaluate: F,
) -> Option<SecretCode>
where
    F: Fn(&SecretCode) -> f64 + Sync,
{
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, evaluate(guess), candidates.contains(guess)))
        .max_by(|a, b| {
            a.1.total_cmp(&b.1)
                .then(a.2.cmp(&b.2))
                .then_with(|| b.0.cmp(&a.0))
        })
        .map(|(index, _, _)| guess_pool[index])
}

/// Entropy maximization strategy
///
/// Selects the guess with the highest Shannon entropy over the candidates.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(
        &self,
        guess_pool: &[SecretCode],
        candidates: &[SecretCode],
    ) -> Option<SecretCode> {
        select_best(guess_pool, candidates, |guess| {
            calculate_entropy(guess, candidates)
        })
    }
}

/// Minimax strategy
///
/// Selects the guess that minimizes the worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(
        &self,
        guess_pool: &[SecretCode],
        candidates: &[SecretCode],
    ) -> Option<SecretCode> {
        select_best(guess_pool, candidates, |guess| {
            -(calculate_max_partition(guess, candidates) as f64)
        })
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates, ignoring the pool.
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomStrategy {
    /// Seeded from the thread RNG
    fn default() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[SecretCode],
        candidates: &[SecretCode],
    ) -> Option<SecretCode> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        candidates.choose(&mut *rng).copied()
    }
}

/// Guesses the first remaining candidate
///
/// Cheap baseline: always consistent with everything seen so far.
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[SecretCode],
        candidates: &[SecretCode],
    ) -> Option<SecretCode> {
        candidates.first().copied()
    }
}
