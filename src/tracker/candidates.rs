//! Candidate set storage and filtering

use super::enumerate::{all_codes, permutations};
use crate::core::{CodeError, Score, SecretCode};
use log::debug;
use rayon::prelude::*;

/// Codes still consistent with every (guess, score) pair seen so far
///
/// Keeps the order it was built with; filtering only removes entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    digit_count: usize,
    codes: Vec<SecretCode>,
}

impl CandidateSet {
    /// Full universe of codes with `digit_count` digits, ascending
    ///
    /// # Errors
    /// Returns `CodeError::InvalidInput` if `digit_count` is not in 1..=10.
    pub fn new(digit_count: usize) -> Result<Self, CodeError> {
        let codes = all_codes(digit_count)?;
        debug!(
            "Enumerated {} candidate codes of {digit_count} digits",
            codes.len()
        );
        Ok(Self { digit_count, codes })
    }

    /// Full universe of codes with the same length as `code`
    #[must_use]
    pub fn matching_length(code: &SecretCode) -> Self {
        let digit_count = code.len();
        let codes = permutations(digit_count);
        debug!(
            "Enumerated {} candidate codes of {digit_count} digits",
            codes.len()
        );
        Self { digit_count, codes }
    }

    /// Build a set from explicit codes, keeping their order
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if any code is not `digit_count` long.
    pub fn from_codes(digit_count: usize, codes: Vec<SecretCode>) -> Result<Self, CodeError> {
        if let Some(bad) = codes.iter().find(|c| c.len() != digit_count) {
            return Err(CodeError::LengthMismatch {
                expected: digit_count,
                actual: bad.len(),
            });
        }
        Ok(Self { digit_count, codes })
    }

    /// Keep only codes that would score `score` for `guess` if they were the secret
    ///
    /// Returns the number of codes removed. Candidates are checked in parallel;
    /// survivors keep their relative order.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if `guess` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Score, SecretCode};
    /// use bulls_and_cows::tracker::CandidateSet;
    ///
    /// let mut set = CandidateSet::new(4).unwrap();
    /// let guess = SecretCode::new("1234").unwrap();
    /// set.retain_consistent(&guess, Score::solved(4)).unwrap();
    /// assert_eq!(set.as_slice(), &[guess]);
    /// ```
    pub fn retain_consistent(
        &mut self,
        guess: &SecretCode,
        score: Score,
    ) -> Result<usize, CodeError> {
        if guess.len() != self.digit_count {
            return Err(CodeError::LengthMismatch {
                expected: self.digit_count,
                actual: guess.len(),
            });
        }

        let before = self.codes.len();
        self.codes = std::mem::take(&mut self.codes)
            .into_par_iter()
            .filter(|candidate| candidate.compare(guess) == score)
            .collect();
        let removed = before - self.codes.len();

        debug!(
            "Guess {guess} ({score}) removed {removed} candidates, {} remain",
            self.codes.len()
        );
        Ok(removed)
    }

    /// Codes in their current order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[SecretCode] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Digit count shared by every code in the set
    #[inline]
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[must_use]
    pub fn contains(&self, code: &SecretCode) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SecretCode> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a SecretCode;
    type IntoIter = std::slice::Iter<'a, SecretCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
