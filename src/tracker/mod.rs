//! Candidate tracking for a game in progress
//!
//! `CandidateTracker` holds the true secret and narrows the universe of
//! possible codes as guesses are scored against it.

mod candidates;
mod enumerate;

pub use candidates::CandidateSet;
pub use enumerate::{all_codes, universe_size};

use crate::core::{CodeError, Score, SecretCode};
use log::debug;

/// Scores guesses against a secret and keeps the codes consistent with them
///
/// The true secret is never filtered out, since it always reproduces its own
/// scores.
#[derive(Debug, Clone)]
pub struct CandidateTracker {
    secret: SecretCode,
    candidates: CandidateSet,
    history: Vec<(SecretCode, Score)>,
}

impl CandidateTracker {
    /// Create a tracker with every code of the secret's length as a candidate
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::SecretCode;
    /// use bulls_and_cows::tracker::CandidateTracker;
    ///
    /// let secret = SecretCode::new("1234").unwrap();
    /// let mut tracker = CandidateTracker::new(secret);
    /// assert_eq!(tracker.remaining_candidates().len(), 5040);
    ///
    /// let score = tracker.score_and_filter("1243").unwrap();
    /// assert_eq!((score.bulls(), score.cows()), (2, 2));
    /// assert!(tracker.remaining_candidates().contains(&secret));
    /// ```
    #[must_use]
    pub fn new(secret: SecretCode) -> Self {
        debug!("Tracking candidates for a {}-digit secret", secret.len());
        Self {
            candidates: CandidateSet::matching_length(&secret),
            secret,
            history: Vec::new(),
        }
    }

    /// Score a guess string against the secret and drop inconsistent candidates
    ///
    /// Rejected guesses leave the tracker untouched.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the guess length differs from the
    /// secret's, or `CodeError::InvalidCode` if the guess is malformed.
    pub fn score_and_filter(&mut self, guess: &str) -> Result<Score, CodeError> {
        let guess = self.secret.parse_guess(guess)?;
        self.score_and_filter_code(&guess)
    }

    /// Score an already parsed guess and drop inconsistent candidates
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the guess length differs from the
    /// secret's.
    pub fn score_and_filter_code(&mut self, guess: &SecretCode) -> Result<Score, CodeError> {
        let score = self.secret.score_code(guess)?;
        self.candidates.retain_consistent(guess, score)?;
        self.history.push((*guess, score));
        Ok(score)
    }

    /// Codes still consistent with every scored guess, in enumeration order
    #[inline]
    #[must_use]
    pub fn remaining_candidates(&self) -> &[SecretCode] {
        self.candidates.as_slice()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.secret.len()
    }

    /// Accepted guesses and their scores, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(SecretCode, Score)] {
        &self.history
    }

    /// Check if exactly one candidate is left
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;

    fn tracker_for(secret: &str) -> CandidateTracker {
        CandidateTracker::new(SecretCode::new(secret).unwrap())
    }

    #[test]
    fn initial_candidates_are_all_permutations() {
        let tracker = tracker_for("1234");
        let candidates = tracker.remaining_candidates();

        assert_eq!(candidates.len(), 5040);
        assert_eq!(candidates, all_codes(4).unwrap().as_slice());
        assert!(candidates.iter().all(|c| c.len() == 4));
        assert!(!tracker.is_solved());
    }

    #[test]
    fn guessing_the_secret_leaves_only_the_secret() {
        let mut tracker = tracker_for("1234");
        let score = tracker.score_and_filter("1234").unwrap();

        assert_eq!(score, Score::new(4, 0, 0));
        assert_eq!(
            tracker.remaining_candidates(),
            &[SecretCode::new("1234").unwrap()]
        );
        assert!(tracker.is_solved());
    }

    #[test]
    fn disjoint_guess_removes_codes_sharing_its_digits() {
        let mut tracker = tracker_for("1234");
        let score = tracker.score_and_filter("5678").unwrap();

        assert_eq!(score, Score::new(0, 0, 4));
        let remaining = tracker.remaining_candidates();
        assert!(remaining.contains(tracker.secret()));
        for candidate in remaining {
            for digit in [5, 6, 7, 8] {
                assert!(!candidate.contains(digit), "{candidate} contains {digit}");
            }
        }
        // Four positions from the six digits 0,1,2,3,4,9
        assert_eq!(remaining.len(), 360);
    }

    #[test]
    fn candidate_count_never_grows() {
        let mut tracker = tracker_for("7046");
        let mut previous = tracker.remaining_candidates().len();

        for guess in ["0123", "4567", "8901", "7604", "7046"] {
            tracker.score_and_filter(guess).unwrap();
            let current = tracker.remaining_candidates().len();
            assert!(current <= previous);
            assert!(tracker.remaining_candidates().contains(tracker.secret()));
            previous = current;
        }
        assert!(tracker.is_solved());
    }

    #[test]
    fn repeating_a_guess_is_idempotent() {
        let mut tracker = tracker_for("3952");
        let first = tracker.score_and_filter("3519").unwrap();
        let after_first = tracker.remaining_candidates().to_vec();

        let second = tracker.score_and_filter("3519").unwrap();
        assert_eq!(first, second);
        assert_eq!(tracker.remaining_candidates(), after_first.as_slice());
    }

    #[test]
    fn survivors_keep_enumeration_order() {
        let mut tracker = tracker_for("5309");
        tracker.score_and_filter("0935").unwrap();
        assert!(
            tracker
                .remaining_candidates()
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        );
    }

    #[test]
    fn every_survivor_reproduces_the_observed_score() {
        let mut tracker = tracker_for("8172");
        let score = tracker.score_and_filter("1780").unwrap();
        for candidate in tracker.remaining_candidates() {
            assert_eq!(candidate.score("1780").unwrap(), score);
        }
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_filtering() {
        let mut tracker = tracker_for("1234");
        let result = tracker.score_and_filter("12");

        assert_eq!(
            result,
            Err(CodeError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(tracker.remaining_candidates().len(), 5040);
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn malformed_guess_is_rejected_without_filtering() {
        let mut tracker = tracker_for("1234");
        assert!(matches!(
            tracker.score_and_filter("1123"),
            Err(CodeError::InvalidCode(_))
        ));
        assert!(matches!(
            tracker.score_and_filter("12a4"),
            Err(CodeError::InvalidCode(_))
        ));
        assert_eq!(tracker.remaining_candidates().len(), 5040);
    }

    #[test]
    fn history_records_accepted_guesses() {
        let mut tracker = tracker_for("1234");
        tracker.score_and_filter("5678").unwrap();
        let _ = tracker.score_and_filter("56");
        tracker.score_and_filter("1243").unwrap();

        let history: Vec<(String, Score)> = tracker
            .history()
            .iter()
            .map(|(guess, score)| (guess.to_string(), *score))
            .collect();
        assert_eq!(
            history,
            [
                ("5678".to_string(), Score::new(0, 0, 4)),
                ("1243".to_string(), Score::new(2, 2, 0)),
            ]
        );
    }

    #[test]
    fn secret_survives_random_games() {
        let mut rng = StdRng::seed_from_u64(2024);
        let universe = all_codes(4).unwrap();

        for _ in 0..5 {
            let secret = SecretCode::random(&mut rng, 4).unwrap();
            let mut tracker = CandidateTracker::new(secret);
            for _ in 0..6 {
                let guess = *universe.choose(&mut rng).unwrap();
                tracker.score_and_filter_code(&guess).unwrap();
                assert!(tracker.remaining_candidates().contains(&secret));
            }
        }
    }

    #[test]
    fn small_digit_counts() {
        let mut tracker = tracker_for("7");
        assert_eq!(tracker.remaining_candidates().len(), 10);
        assert_eq!(tracker.score_and_filter("3").unwrap(), Score::new(0, 0, 1));
        assert_eq!(tracker.remaining_candidates().len(), 9);
        assert_eq!(tracker.digit_count(), 1);
    }
}
