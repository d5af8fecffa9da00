//! Error types for code parsing and scoring

use std::fmt;

/// Why a digit string or digit sequence is not a valid code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCodeReason {
    Empty,
    TooLong(usize),
    NonDigit(char),
    DigitOutOfRange(u8),
    DuplicateDigit(u8),
}

/// Why a low-level digit or position query was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputReason {
    DigitOutOfRange(u8),
    PositionOutOfRange { position: usize, len: usize },
    DigitCount(usize),
}

/// Error type for everything the core can reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Malformed code: non-digit, repeated digit, or bad length
    InvalidCode(InvalidCodeReason),
    /// Guess length differs from the secret's digit count
    LengthMismatch { expected: usize, actual: usize },
    /// Out-of-domain digit, position or digit count
    InvalidInput(InvalidInputReason),
}

impl fmt::Display for InvalidCodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "code is empty"),
            Self::TooLong(len) => {
                write!(f, "code has {len} digits, at most 10 are allowed")
            }
            Self::NonDigit(ch) => write!(f, "'{ch}' is not a decimal digit"),
            Self::DigitOutOfRange(d) => write!(f, "{d} is not a single decimal digit"),
            Self::DuplicateDigit(d) => write!(f, "digit {d} appears more than once"),
        }
    }
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitOutOfRange(d) => write!(f, "{d} is not a single decimal digit"),
            Self::PositionOutOfRange { position, len } => {
                write!(f, "position {position} is outside a {len}-digit code")
            }
            Self::DigitCount(n) => write!(f, "digit count must be between 1 and 10, got {n}"),
        }
    }
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(reason) => write!(f, "Invalid code: {reason}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must have exactly {expected} digits, got {actual}")
            }
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl From<InvalidCodeReason> for CodeError {
    fn from(reason: InvalidCodeReason) -> Self {
        Self::InvalidCode(reason)
    }
}

impl From<InvalidInputReason> for CodeError {
    fn from(reason: InvalidInputReason) -> Self {
        Self::InvalidInput(reason)
    }
}
