//! Main Bulls and Cows solver interface

use super::strategy::Strategy;
use crate::core::{CodeError, SecretCode};
use crate::tracker::all_codes;
use log::trace;

/// Upper bound on guess × candidate scorings spent choosing one guess
pub const EVALUATION_BUDGET: usize = 8_000_000;

/// Bulls and Cows solver
///
/// Coordinates guess selection for one digit count using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
    universe: Vec<SecretCode>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for codes of `digit_count` digits
    ///
    /// # Errors
    /// Returns `CodeError::InvalidInput` if `digit_count` is not in 1..=10.
    pub fn new(strategy: S, digit_count: usize) -> Result<Self, CodeError> {
        Ok(Self {
            strategy,
            universe: all_codes(digit_count)?,
        })
    }

    /// Every code of the solver's digit count, ascending
    #[must_use]
    pub fn universe(&self) -> &[SecretCode] {
        &self.universe
    }

    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.universe.first().map_or(0, SecretCode::len)
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Suggest the next guess for the remaining candidates
    ///
    /// Returns `None` if no candidates remain, and the sole candidate if only
    /// one is left. Before anything is known every opening is equivalent up to
    /// relabelling digits, so the first code is used without evaluation.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::SecretCode;
    /// use bulls_and_cows::solver::{EntropyStrategy, Solver};
    /// use bulls_and_cows::tracker::CandidateTracker;
    ///
    /// let solver = Solver::new(EntropyStrategy, 3).unwrap();
    /// let mut tracker = CandidateTracker::new(SecretCode::new("812").unwrap());
    ///
    /// while !tracker.history().last().is_some_and(|(_, s)| s.is_perfect()) {
    ///     let guess = solver.next_guess(tracker.remaining_candidates()).unwrap();
    ///     tracker.score_and_filter_code(&guess).unwrap();
    /// }
    /// assert!(tracker.history().len() <= 8);
    /// ```
    #[must_use]
    pub fn next_guess(&self, candidates: &[SecretCode]) -> Option<SecretCode> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ if candidates.len() == self.universe.len() => self.universe.first().copied(),
            _ => {
                let pool = self.guess_pool(candidates);
                trace!(
                    "Selecting among {} guesses for {} candidates",
                    pool.len(),
                    candidates.len()
                );
                self.strategy.select_guess(pool, candidates)
            }
        }
    }

    /// Guesses worth evaluating within the budget
    ///
    /// The whole universe while it fits, since non-candidates can split the
    /// candidates better; otherwise a prefix of the candidates.
    fn guess_pool<'a>(&'a self, candidates: &'a [SecretCode]) -> &'a [SecretCode] {
        if self.universe.len().saturating_mul(candidates.len()) <= EVALUATION_BUDGET {
            &self.universe
        } else {
            let limit = (EVALUATION_BUDGET / candidates.len()).clamp(1, candidates.len());
            &candidates[..limit]
        }
    }
}
