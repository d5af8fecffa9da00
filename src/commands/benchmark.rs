//! Benchmark command
//!
//! Tests solver performance across a random sample of secrets.

use super::seeded_rng;
use super::solve::solve_code;
use crate::core::SecretCode;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of secrets to solve, capped at the universe size
    pub count: usize,
    pub seed: Option<u64>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: None,
            max_guesses: 10,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    /// Secret that took the most guesses (or was not solved)
    pub hardest: Option<(SecretCode, usize)>,
}

/// Draw `count` distinct secrets from the universe, ascending
fn sample_secrets(universe: &[SecretCode], count: usize, seed: Option<u64>) -> Vec<SecretCode> {
    let mut rng = seeded_rng(seed);
    let mut sample: Vec<SecretCode> = universe
        .choose_multiple(&mut rng, count.min(universe.len()))
        .copied()
        .collect();
    sample.sort_unstable();
    sample
}

/// Run the solver against a sample of secrets
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game fails
/// to produce a guess.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let secrets = sample_secrets(solver.universe(), config.count, config.seed);
    info!(
        "Benchmarking {} secrets of {} digits",
        secrets.len(),
        solver.digit_count()
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut hardest: Option<(SecretCode, usize)> = None;

    for secret in &secrets {
        let result = solve_code(*secret, config.max_guesses, false, solver)?;
        let guesses = result.steps.len();

        if result.success {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        // Failures count as one past the limit
        let cost = if result.success { guesses } else { guesses + 1 };
        if hardest.is_none_or(|(_, worst)| cost > worst) {
            hardest = Some((*secret, cost));
        }

        pb.set_message(format!("{secret} in {guesses}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();
    let seconds = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_games,
        solved,
        failed: total_games - solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        games_per_second: if seconds > 0.0 {
            total_games as f64 / seconds
        } else {
            0.0
        },
        hardest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, FirstCandidateStrategy, StrategyType};

    fn config(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let solver = Solver::new(EntropyStrategy, 3).unwrap();
        let result = run_benchmark(&solver, &config(10, 7)).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert_eq!(result.failed, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 10);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = Solver::new(EntropyStrategy, 3).unwrap();
        let result = run_benchmark(&solver, &config(20, 3)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let solver = Solver::new(EntropyStrategy, 3).unwrap();
        let result = run_benchmark(&solver, &config(15, 11)).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        let (_, worst) = result.hardest.unwrap();
        assert_eq!(worst, result.max_guesses);
    }

    #[test]
    fn failures_are_counted() {
        let solver = Solver::new(FirstCandidateStrategy, 4).unwrap();
        let mut config = config(20, 5);
        config.max_guesses = 1;

        let result = run_benchmark(&solver, &config).unwrap();
        assert_eq!(result.solved + result.failed, 20);
        // Only the opening code can be solved in one guess
        assert!(result.solved <= 1);
    }

    #[test]
    fn seeded_random_strategy_is_reproducible() {
        let run = || {
            let strategy = StrategyType::from_name_with_rng("random", seeded_rng(Some(1)));
            let solver = Solver::new(strategy, 3).unwrap();
            run_benchmark(&solver, &config(20, 1)).unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.hardest, second.hardest);
        assert_eq!(first.total_guesses, second.total_guesses);
    }

    #[test]
    fn sample_is_distinct_sorted_and_capped() {
        let universe = crate::tracker::all_codes(2).unwrap();

        let sample = sample_secrets(&universe, 30, Some(1));
        assert_eq!(sample.len(), 30);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sample, sample_secrets(&universe, 30, Some(1)));

        assert_eq!(sample_secrets(&universe, 500, Some(1)).len(), 90);
    }

    #[test]
    fn empty_benchmark() {
        let solver = Solver::new(EntropyStrategy, 2).unwrap();
        let result = run_benchmark(&solver, &config(0, 1)).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.hardest.is_none());
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
