//! Score partitions of a candidate set
//!
//! A guess splits the candidates into groups by the score each candidate would
//! return. The shape of that partition drives every guess-selection strategy:
//! - Shannon entropy of the group sizes (expected information in bits)
//! - Expected size of the group the secret falls into
//! - Size of the largest group (worst case)

use crate::core::{Score, SecretCode};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Count candidates by the score they would give `guess`
///
/// Candidates whose length differs from the guess are skipped.
#[must_use]
pub fn partition_counts(guess: &SecretCode, candidates: &[SecretCode]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        if let Ok(score) = candidate.score_code(guess) {
            *counts.entry(score).or_insert(0) += 1;
        }
    }

    counts
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Score;
/// use bulls_and_cows::solver::partition::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Score::new(0, 0, 4), 25);
/// uniform.insert(Score::new(1, 0, 3), 25);
/// uniform.insert(Score::new(0, 1, 3), 25);
/// uniform.insert(Score::new(2, 0, 2), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(counts: &HashMap<Score, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Shannon entropy of the partition a guess induces
#[must_use]
pub fn calculate_entropy(guess: &SecretCode, candidates: &[SecretCode]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&partition_counts(guess, candidates))
}

/// Size of the largest group a guess leaves behind
#[must_use]
pub fn calculate_max_partition(guess: &SecretCode, candidates: &[SecretCode]) -> usize {
    partition_counts(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Calculate entropy, expected remaining candidates and worst case in one pass
#[must_use]
pub fn calculate_metrics(guess: &SecretCode, candidates: &[SecretCode]) -> GuessMetrics {
    let counts = partition_counts(guess, candidates);
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().max().copied().unwrap_or(0),
    }
}
