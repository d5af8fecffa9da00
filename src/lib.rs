//! Bulls and Cows
//!
//! Secret codes of distinct digits, bulls-and-cows scoring, and tracking of
//! the codes still consistent with every scored guess. A solver suggests
//! guesses by entropy or minimax over the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::SecretCode;
//! use bulls_and_cows::tracker::CandidateTracker;
//!
//! let secret = SecretCode::new("4271").unwrap();
//! let score = secret.score("1234").unwrap();
//! assert_eq!((score.bulls(), score.cows()), (1, 2));
//!
//! let mut tracker = CandidateTracker::new(secret);
//! tracker.score_and_filter("1234").unwrap();
//! assert!(tracker.remaining_candidates().contains(&secret));
//! ```

// Core domain types
pub mod core;

// Candidate enumeration and filtering
pub mod tracker;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
