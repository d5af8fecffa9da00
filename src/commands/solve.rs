//! Code solving command
//!
//! Lets the solver play against a known secret and records the solution path.

use crate::core::{Score, SecretCode};
use crate::solver::partition::calculate_entropy;
use crate::solver::{Solver, Strategy};
use crate::tracker::CandidateTracker;
use anyhow::{Context, Result, bail};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
    /// Compute entropy for every step (costly for long codes)
    pub with_metrics: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
            with_metrics: true,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: SecretCode,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: SecretCode,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve the secret given as text
///
/// # Errors
///
/// Returns an error if the secret is not a valid code, or if its length
/// differs from the solver's digit count.
pub fn solve_secret<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let secret = SecretCode::new(&config.secret)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    if secret.len() != solver.digit_count() {
        bail!(
            "Secret '{secret}' has {} digits but the solver plays {}-digit codes",
            secret.len(),
            solver.digit_count()
        );
    }

    solve_code(secret, config.max_guesses, config.with_metrics, solver)
}

/// Solve an already parsed secret
///
/// Stops after `max_guesses` guesses; `success` reports whether the secret
/// was found.
///
/// # Errors
///
/// Returns an error if the solver runs out of guesses before the limit, which
/// only happens when the secret's length differs from the solver's.
pub fn solve_code<S: Strategy>(
    secret: SecretCode,
    max_guesses: usize,
    with_metrics: bool,
    solver: &Solver<S>,
) -> Result<SolveResult> {
    let mut tracker = CandidateTracker::new(secret);
    let mut steps = Vec::new();

    for _ in 0..max_guesses {
        let candidates_before = tracker.remaining_candidates().len();

        let guess = solver
            .next_guess(tracker.remaining_candidates())
            .context("No candidates remaining")?;

        let (entropy, expected_remaining) = if with_metrics && candidates_before > 1 {
            let entropy = calculate_entropy(&guess, tracker.remaining_candidates());
            (
                Some(entropy),
                Some(candidates_before as f64 / entropy.exp2()),
            )
        } else {
            (None, None)
        };

        let score = tracker.score_and_filter_code(&guess)?;

        steps.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after: tracker.remaining_candidates().len(),
            entropy,
            expected_remaining,
        });

        if score.is_perfect() {
            return Ok(SolveResult {
                success: true,
                steps,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        secret,
    })
}
