//! Guess analysis command
//!
//! Shows how a guess would split a candidate set.

use crate::core::{Score, SecretCode};
use crate::solver::GuessMetrics;
use crate::solver::partition::{calculate_metrics, partition_counts};
use anyhow::{Context, Result, bail};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: SecretCode,
    pub total_candidates: usize,
    pub metrics: GuessMetrics,
    /// Candidates per score, largest group first
    pub partitions: Vec<(Score, usize)>,
}

impl AnalysisResult {
    /// Average factor by which the guess shrinks the candidate set
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if the guess is not a valid code or if its length differs
/// from the candidates'.
pub fn analyze_guess(guess: &str, candidates: &[SecretCode]) -> Result<AnalysisResult> {
    let guess = SecretCode::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    let expected = candidates.first().map_or(guess.len(), SecretCode::len);
    if expected != guess.len() {
        bail!(
            "Guess '{guess}' has {} digits but the candidates have {expected}",
            guess.len()
        );
    }

    let mut partitions: Vec<(Score, usize)> =
        partition_counts(&guess, candidates).into_iter().collect();
    partitions.sort_by(|(a, a_count), (b, b_count)| {
        b_count
            .cmp(a_count)
            .then(b.bulls().cmp(&a.bulls()))
            .then(b.cows().cmp(&a.cows()))
    });

    Ok(AnalysisResult {
        guess,
        total_candidates: candidates.len(),
        metrics: calculate_metrics(&guess, candidates),
        partitions,
    })
}
