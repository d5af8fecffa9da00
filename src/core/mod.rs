//! Core domain types for Bulls and Cows
//!
//! Codes, scores and the errors raised while parsing or scoring them.
//! Everything here is pure and deterministic apart from `SecretCode::random`,
//! which takes its random source from the caller.

mod code;
mod error;
mod score;

pub use code::{DEFAULT_DIGITS, MAX_DIGITS, SecretCode};
pub use error::{CodeError, InvalidCodeReason, InvalidInputReason};
pub use score::{DigitRole, Score};
