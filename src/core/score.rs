//! Bulls and Cows feedback for a single guess
//!
//! Every guessed digit falls into exactly one role:
//! - Bull: same digit at the same position
//! - Cow: digit present in the secret at another position
//! - None: digit absent from the secret
//!
//! A `Score` counts the three roles; the counts always add up to the code length.

use std::fmt;

/// Role of one guessed digit relative to the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitRole {
    Bull,
    Cow,
    None,
}

/// Bulls, cows and misses for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    bulls: u8,
    cows: u8,
    none: u8,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8, none: u8) -> Self {
        Self { bulls, cows, none }
    }

    /// The score of a correct guess of `digit_count` digits
    #[inline]
    #[must_use]
    pub const fn solved(digit_count: usize) -> Self {
        Self::new(digit_count as u8, 0, 0)
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    #[inline]
    #[must_use]
    pub const fn none(self) -> u8 {
        self.none
    }

    /// Number of digits scored (the code length)
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.bulls as usize + self.cows as usize + self.none as usize
    }

    /// Check if every digit is a bull
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.bulls > 0 && self.cows == 0 && self.none == 0
    }

    /// Count one more digit with the given role
    #[inline]
    pub const fn record(&mut self, role: DigitRole) {
        match role {
            DigitRole::Bull => self.bulls += 1,
            DigitRole::Cow => self.cows += 1,
            DigitRole::None => self.none += 1,
        }
    }

    /// Parse player-entered feedback for a code of `digit_count` digits
    ///
    /// Accepts:
    /// - Two bare numbers, bulls first: "1 2", "1,2"
    /// - Labelled counts in any order: "1b2c", "2C 1B", "3b"
    ///
    /// Missing counts are zero. Returns `None` for anything else, or when
    /// bulls and cows add up to more than `digit_count`.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Score;
    ///
    /// assert_eq!(Score::from_feedback("1 2", 4), Some(Score::new(1, 2, 1)));
    /// assert_eq!(Score::from_feedback("2c1b", 4), Some(Score::new(1, 2, 1)));
    /// assert_eq!(Score::from_feedback("3 2", 4), None);
    /// ```
    #[must_use]
    pub fn from_feedback(input: &str, digit_count: usize) -> Option<Self> {
        let mut bulls: Option<usize> = None;
        let mut cows: Option<usize> = None;
        let mut unlabelled: Vec<usize> = Vec::new();
        let mut chars = input.trim().chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_whitespace() || ch == ',' || ch == '/' {
                continue;
            }

            let mut value = ch.to_digit(10)? as usize;
            while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                value = value.checked_mul(10)?.checked_add(next as usize)?;
                chars.next();
            }

            match chars.peek() {
                Some('b' | 'B') => {
                    chars.next();
                    if bulls.replace(value).is_some() {
                        return None;
                    }
                }
                Some('c' | 'C') => {
                    chars.next();
                    if cows.replace(value).is_some() {
                        return None;
                    }
                }
                _ => unlabelled.push(value),
            }
        }

        let mut unlabelled = unlabelled.into_iter();
        if bulls.is_none() {
            bulls = unlabelled.next();
        }
        if cows.is_none() {
            cows = unlabelled.next();
        }
        if unlabelled.next().is_some() || (bulls.is_none() && cows.is_none()) {
            return None;
        }

        let bulls = bulls.unwrap_or(0);
        let cows = cows.unwrap_or(0);
        let none = digit_count.checked_sub(bulls.checked_add(cows)?)?;

        Some(Self::new(bulls as u8, cows as u8, none as u8))
    }
}

impl FromIterator<DigitRole> for Score {
    fn from_iter<I: IntoIterator<Item = DigitRole>>(iter: I) -> Self {
        let mut score = Self::default();
        for role in iter {
            score.record(role);
        }
        score
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}
