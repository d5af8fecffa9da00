//! Bulls and Cows - CLI
//!
//! Play against a random secret, get guess suggestions for a game played
//! elsewhere, or measure how well the solver strategies do.

use anyhow::Result;
use bulls_and_cows::{
    commands::{
        BenchmarkConfig, HintLevel, PlayConfig, SecretSelection, SolveConfig, analyze_guess,
        digit_count_for, run_assist, run_benchmark, run_play, seeded_rng, solve_secret,
    },
    core::DEFAULT_DIGITS,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::io;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows game with entropy and minimax solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the secret (1-10); defaults to the length of an
    /// explicit secret or guess, else 4
    #[arg(short = 'n', long, global = true, value_parser = clap::value_parser!(u8).range(1..=10))]
    digits: Option<u8>,

    /// Strategy: entropy (default), minimax, random, first
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden secret (default)
    Play {
        /// Use this secret instead of a random one
        #[arg(long)]
        secret: Option<String>,

        /// Number of guesses allowed
        #[arg(short, long, default_value = "5")]
        max_steps: usize,

        /// 0: score only, 1: remaining count, 2: list remaining codes
        #[arg(long, default_value = "2")]
        hint_level: u8,

        /// Seed for the random secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Suggest guesses for a secret held by someone else
    Assist,

    /// Solve a specific secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Show verbose output with candidate counts and entropy
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "10")]
        max_steps: usize,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze how a guess splits every possible secret
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Seed for the secret sample and the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Give up on a secret after this many guesses
        #[arg(short, long, default_value = "10")]
        max_steps: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let digits = cli.digits.map(usize::from);
    debug!(
        "Starting with digits {digits:?} and the {} strategy",
        cli.strategy
    );

    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        max_steps: 5,
        hint_level: 2,
        seed: None,
    });

    match command {
        Commands::Play {
            secret,
            max_steps,
            hint_level,
            seed,
        } => run_play_command(digits, secret, max_steps, hint_level, seed),
        Commands::Assist => {
            let solver = build_solver(&cli.strategy, digits.unwrap_or(DEFAULT_DIGITS), None)?;
            run_assist(&solver, &mut io::stdin().lock(), &mut io::stdout())
        }
        Commands::Solve {
            secret,
            verbose,
            max_steps,
            seed,
        } => {
            let solver = build_solver(&cli.strategy, digit_count_for(&secret, digits), seed)?;
            solve_command(&solver, secret, verbose, max_steps)
        }
        Commands::Analyze { guess } => {
            let solver = build_solver(&cli.strategy, digit_count_for(&guess, digits), None)?;
            let result = analyze_guess(&guess, solver.universe())?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_steps,
        } => {
            let digit_count = digits.unwrap_or(DEFAULT_DIGITS);
            let solver = build_solver(&cli.strategy, digit_count, seed)?;
            benchmark_command(&solver, count, seed, max_steps)
        }
    }
}

fn build_solver(
    strategy_name: &str,
    digit_count: usize,
    seed: Option<u64>,
) -> Result<Solver<StrategyType>> {
    let strategy = StrategyType::from_name_with_rng(strategy_name, seeded_rng(seed));
    debug!("Using the {} strategy", strategy.name());
    Ok(Solver::new(strategy, digit_count)?)
}

fn run_play_command(
    digit_count: Option<usize>,
    secret: Option<String>,
    max_steps: usize,
    hint_level: u8,
    seed: Option<u64>,
) -> Result<()> {
    let selection = secret.map_or(SecretSelection::Random { seed }, SecretSelection::Explicit);

    let config = PlayConfig {
        digit_count,
        max_steps,
        hint_level: HintLevel::from_level(hint_level),
        ..PlayConfig::new(selection)
    };

    let outcome = run_play(&config, &mut io::stdin().lock(), &mut io::stdout())?;
    debug!("Game ended: {outcome:?}");
    Ok(())
}

fn solve_command<S: Strategy>(
    solver: &Solver<S>,
    secret: String,
    verbose: bool,
    max_steps: usize,
) -> Result<()> {
    let config = SolveConfig {
        max_guesses: max_steps,
        with_metrics: verbose,
        ..SolveConfig::new(secret)
    };
    let result = solve_secret(&config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn benchmark_command<S: Strategy>(
    solver: &Solver<S>,
    count: usize,
    seed: Option<u64>,
    max_steps: usize,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random {}-digit secrets...",
        solver.digit_count()
    );

    let config = BenchmarkConfig {
        count,
        seed,
        max_guesses: max_steps,
        show_progress: true,
    };
    let result = run_benchmark(solver, &config)?;
    print_benchmark_result(&result);
    Ok(())
}
