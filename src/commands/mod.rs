//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use assist::run_assist;
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{GameOutcome, HintLevel, PlayConfig, SecretSelection, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code, solve_secret};

use crate::core::{DEFAULT_DIGITS, SecretCode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Random source for secret and sample selection
///
/// A seed gives reproducible runs; without one the generator is seeded from
/// the thread RNG.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Digit count for a command that is given an explicit code
///
/// A configured count wins. Otherwise the code's own length is used, or the
/// default if the code is not valid (the command then reports why).
#[must_use]
pub fn digit_count_for(code: &str, configured: Option<usize>) -> usize {
    configured.unwrap_or_else(|| SecretCode::new(code).map_or(DEFAULT_DIGITS, |c| c.len()))
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Cursor;

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(5)).random();
        let b: u64 = seeded_rng(Some(5)).random();
        assert_eq!(a, b);
    }

    #[test]
    fn digit_count_follows_the_code_unless_configured() {
        assert_eq!(digit_count_for("123", None), 3);
        assert_eq!(digit_count_for("0123456789", None), 10);
        assert_eq!(digit_count_for("123", Some(4)), 4);
        assert_eq!(digit_count_for("1123", None), DEFAULT_DIGITS);
    }

    #[test]
    fn explicit_code_sets_the_solver_length() {
        use crate::solver::{EntropyStrategy, Solver};

        let solver = Solver::new(EntropyStrategy, digit_count_for("123", None)).unwrap();
        let result = solve_secret(&SolveConfig::new("123".to_string()), &solver).unwrap();
        assert!(result.success);

        let solver = Solver::new(EntropyStrategy, digit_count_for("56", None)).unwrap();
        let analysis = analyze_guess("56", solver.universe()).unwrap();
        assert_eq!(analysis.total_candidates, 90);
    }

    #[test]
    fn read_input_trims_and_detects_eof() {
        let mut input = Cursor::new("  1234 \n");
        let mut output = Vec::new();

        let line = read_input(&mut input, &mut output, "Guess").unwrap();
        assert_eq!(line.as_deref(), Some("1234"));
        assert_eq!(String::from_utf8(output).unwrap(), "Guess: ");

        let mut output = Vec::new();
        assert_eq!(read_input(&mut input, &mut output, "Guess").unwrap(), None);
    }
}
