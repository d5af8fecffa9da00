//! Secret code representation
//!
//! A `SecretCode` stores up to ten unique decimal digits along with a digit-to-position
//! table, so role lookups during scoring are constant time.

use super::error::{CodeError, InvalidCodeReason, InvalidInputReason};
use super::score::{DigitRole, Score};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Largest supported digit count (every digit 0-9 used once)
pub const MAX_DIGITS: usize = 10;

/// Digit count used when none is configured
pub const DEFAULT_DIGITS: usize = 4;

const NO_POSITION: u8 = u8::MAX;

/// A fixed sequence of pairwise distinct decimal digits
///
/// Used both for the hidden secret and for every guess and candidate.
/// Ordering is by length first, then numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecretCode {
    len: u8,
    digits: [u8; MAX_DIGITS],
    positions: [u8; 10],
}

#[allow(clippy::len_without_is_empty)] // A valid code always has at least one digit
impl SecretCode {
    /// Create a code from a string of decimal digit characters
    ///
    /// # Errors
    /// Returns `CodeError::InvalidCode` if:
    /// - The string is empty or longer than 10 characters
    /// - Any character is not an ASCII digit
    /// - Any digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::SecretCode;
    ///
    /// let code = SecretCode::new("0482").unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.digits(), &[0, 4, 8, 2]);
    ///
    /// assert!(SecretCode::new("1123").is_err());
    /// assert!(SecretCode::new("12a4").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        check_length(len)?;

        let mut digits = [0u8; MAX_DIGITS];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(InvalidCodeReason::NonDigit(ch))?;
            *slot = value as u8;
        }

        Self::from_digits(&digits[..len])
    }

    /// Create a code from a sequence of digit values
    ///
    /// # Errors
    /// Returns `CodeError::InvalidCode` if the sequence is empty or longer than 10,
    /// if any value is above 9, or if any value repeats.
    pub fn from_digits(values: &[u8]) -> Result<Self, CodeError> {
        check_length(values.len())?;

        let mut code = Self {
            len: values.len() as u8,
            digits: [0; MAX_DIGITS],
            positions: [NO_POSITION; 10],
        };

        for (position, &value) in values.iter().enumerate() {
            if value > 9 {
                return Err(InvalidCodeReason::DigitOutOfRange(value).into());
            }
            let slot = &mut code.positions[usize::from(value)];
            if *slot != NO_POSITION {
                return Err(InvalidCodeReason::DuplicateDigit(value).into());
            }
            *slot = position as u8;
            code.digits[position] = value;
        }

        Ok(code)
    }

    /// Build a code from digits already known to be unique, in range and 1..=10 long
    pub(crate) fn from_valid_digits(values: &[u8]) -> Self {
        debug_assert!(Self::from_digits(values).is_ok(), "invalid digits {values:?}");

        let mut code = Self {
            len: values.len() as u8,
            digits: [0; MAX_DIGITS],
            positions: [NO_POSITION; 10],
        };
        for (position, &value) in values.iter().enumerate() {
            code.digits[position] = value;
            code.positions[usize::from(value)] = position as u8;
        }
        code
    }

    /// Draw a uniformly random code of `digit_count` unique digits
    ///
    /// The random source is supplied by the caller, so seeded generators give
    /// reproducible secrets.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidInput` if `digit_count` is not in 1..=10.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::SecretCode;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let secret = SecretCode::random(&mut rng, 4).unwrap();
    /// assert_eq!(secret.len(), 4);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, digit_count: usize) -> Result<Self, CodeError> {
        if !(1..=MAX_DIGITS).contains(&digit_count) {
            return Err(InvalidInputReason::DigitCount(digit_count).into());
        }

        let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);
        Self::from_digits(&pool[..digit_count])
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// The digits in order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Digit at a position
    ///
    /// Returns `None` if `position` is outside the code.
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> Option<u8> {
        self.digits().get(position).copied()
    }

    /// Check whether the code contains a digit value
    #[inline]
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.position_of(value).is_some()
    }

    /// Position of a digit value, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<usize> {
        match self.positions.get(usize::from(value)) {
            Some(&p) if p != NO_POSITION => Some(usize::from(p)),
            _ => None,
        }
    }

    /// Classify a guessed digit at a position against this code
    ///
    /// # Errors
    /// Returns `CodeError::InvalidInput` if `value` is above 9 or `position`
    /// is not a valid index into this code.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{DigitRole, SecretCode};
    ///
    /// let secret = SecretCode::new("1234").unwrap();
    /// assert_eq!(secret.digit_role(1, 0).unwrap(), DigitRole::Bull);
    /// assert_eq!(secret.digit_role(1, 2).unwrap(), DigitRole::Cow);
    /// assert_eq!(secret.digit_role(9, 2).unwrap(), DigitRole::None);
    /// ```
    pub fn digit_role(&self, value: u8, position: usize) -> Result<DigitRole, CodeError> {
        if value > 9 {
            return Err(InvalidInputReason::DigitOutOfRange(value).into());
        }
        if position >= self.len() {
            return Err(InvalidInputReason::PositionOutOfRange {
                position,
                len: self.len(),
            }
            .into());
        }
        Ok(self.role_of(value, position))
    }

    /// Parse a guess string that must have the same length as this code
    ///
    /// The length check happens before digit validation, so "12" against a
    /// four-digit code is a length mismatch even though it is also too short.
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the character count differs,
    /// or `CodeError::InvalidCode` if the guess is not a valid code.
    pub fn parse_guess(&self, guess: &str) -> Result<Self, CodeError> {
        let actual = guess.chars().count();
        if actual != self.len() {
            return Err(CodeError::LengthMismatch {
                expected: self.len(),
                actual,
            });
        }
        Self::new(guess)
    }

    /// Score a guess string against this code
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the guess length differs, or
    /// `CodeError::InvalidCode` if the guess is malformed.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Score, SecretCode};
    ///
    /// let secret = SecretCode::new("1234").unwrap();
    /// assert_eq!(secret.score("1325").unwrap(), Score::new(1, 2, 1));
    /// assert!(secret.score("12").is_err());
    /// ```
    pub fn score(&self, guess: &str) -> Result<Score, CodeError> {
        let guess = self.parse_guess(guess)?;
        Ok(self.compare(&guess))
    }

    /// Score an already parsed guess against this code
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the lengths differ.
    pub fn score_code(&self, guess: &Self) -> Result<Score, CodeError> {
        if guess.len() != self.len() {
            return Err(CodeError::LengthMismatch {
                expected: self.len(),
                actual: guess.len(),
            });
        }
        Ok(self.compare(guess))
    }

    /// Score a guess known to have the same length
    #[inline]
    pub(crate) fn compare(&self, guess: &Self) -> Score {
        debug_assert_eq!(self.len, guess.len, "compare requires equal lengths");
        guess
            .digits()
            .iter()
            .enumerate()
            .map(|(position, &value)| self.role_of(value, position))
            .collect()
    }

    #[inline]
    fn role_of(&self, value: u8, position: usize) -> DigitRole {
        match self.position_of(value) {
            Some(p) if p == position => DigitRole::Bull,
            Some(_) => DigitRole::Cow,
            None => DigitRole::None,
        }
    }
}

fn check_length(len: usize) -> Result<(), CodeError> {
    match len {
        0 => Err(InvalidCodeReason::Empty.into()),
        len if len > MAX_DIGITS => Err(InvalidCodeReason::TooLong(len).into()),
        _ => Ok(()),
    }
}

impl FromStr for SecretCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
