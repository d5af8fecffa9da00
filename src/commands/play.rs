//! Interactive game against a hidden secret
//!
//! The player types guesses; each one is scored and the remaining candidates
//! are shown according to the hint level.

use super::{read_input, seeded_rng};
use crate::core::{DEFAULT_DIGITS, SecretCode};
use crate::output::formatters::{candidate_rows, guess_line, score_to_emoji};
use crate::tracker::CandidateTracker;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// How the secret is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSelection {
    /// Use this digit string; its length overrides the configured digit count
    Explicit(String),
    /// Draw a random permutation, reproducible when seeded
    Random { seed: Option<u64> },
}

impl SecretSelection {
    /// Produce the secret for a game
    ///
    /// `configured` is the digit count the user asked for, if any. A random
    /// secret uses it (or the default); an explicit secret keeps its own length.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit secret is not a valid code, or if the
    /// digit count is outside 1..=10 for a random secret.
    pub fn resolve(&self, configured: Option<usize>) -> Result<SecretCode> {
        match self {
            Self::Explicit(text) => {
                let secret =
                    SecretCode::new(text).with_context(|| format!("Invalid secret '{text}'"))?;
                if let Some(ignored) = conflicting_digit_count(&secret, configured) {
                    warn!(
                        "Secret has {} digits, ignoring configured digit count {ignored}",
                        secret.len()
                    );
                }
                Ok(secret)
            }
            Self::Random { seed } => SecretCode::random(
                &mut seeded_rng(*seed),
                configured.unwrap_or(DEFAULT_DIGITS),
            )
            .context("Cannot draw a random secret"),
        }
    }
}

/// The configured digit count, if one was given and the secret disagrees
fn conflicting_digit_count(secret: &SecretCode, configured: Option<usize>) -> Option<usize> {
    configured.filter(|&count| count != secret.len())
}

/// What is revealed after each guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HintLevel {
    /// Score only
    Off,
    /// Number of remaining candidates
    Count,
    /// Number and full list of remaining candidates
    Full,
}

impl HintLevel {
    /// Map a numeric level (0, 1, 2+) to a hint level
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Off,
            1 => Self::Count,
            _ => Self::Full,
        }
    }
}

/// Configuration for one game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub secret: SecretSelection,
    /// Digit count asked for; `None` means the default or the secret's length
    pub digit_count: Option<usize>,
    pub max_steps: usize,
    pub hint_level: HintLevel,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(secret: SecretSelection) -> Self {
        Self {
            secret,
            digit_count: None,
            max_steps: 5,
            hint_level: HintLevel::Full,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempts: usize },
    Lost,
    Quit,
}

/// Candidates listed per line at the full hint level
const CANDIDATES_PER_ROW: usize = 10;

/// Play one game, reading guesses from `input` and writing to `output`
///
/// Invalid guesses are reported and asked for again without using up an
/// attempt. Typing `quit` or reaching end of input ends the game early.
///
/// # Errors
///
/// Returns an error if the secret cannot be resolved or on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let secret = config.secret.resolve(config.digit_count)?;
    let digit_count = secret.len();
    let mut tracker = CandidateTracker::new(secret);
    debug!("Game started with a {digit_count}-digit secret");

    writeln!(
        output,
        "{}",
        format!("Guess the {digit_count}-digit secret (all digits different).").bright_cyan()
    )?;
    writeln!(
        output,
        "You have {} attempts. Type 'quit' to give up.\n",
        config.max_steps
    )?;

    for step in 1..=config.max_steps {
        let (guess, score) = loop {
            let Some(line) = read_input(input, output, "Enter new combination")? else {
                return Ok(GameOutcome::Quit);
            };

            if matches!(line.as_str(), "quit" | "q" | "exit") {
                writeln!(output, "The secret was {}", secret.to_string().bold())?;
                return Ok(GameOutcome::Quit);
            }

            match tracker.score_and_filter(&line) {
                Ok(score) => break (line, score),
                Err(e) => {
                    writeln!(output, "{} {e}", format!("{line} is not a valid guess:").red())?;
                }
            }
        };

        writeln!(
            output,
            "{} {}",
            guess_line(step, config.max_steps, &guess, score),
            score_to_emoji(score)
        )?;

        if usize::from(score.bulls()) == digit_count {
            writeln!(output, "{}", " Congrats!! You made it!!".bright_green().bold())?;
            return Ok(GameOutcome::Won { attempts: step });
        }

        write_hints(output, tracker.remaining_candidates(), config.hint_level)?;
    }

    writeln!(
        output,
        "{}",
        format!(
            "Sorry. You reached max out of tries ({})",
            config.max_steps
        )
        .red()
    )?;
    writeln!(output, "The secret was {}", secret.to_string().bold())?;
    Ok(GameOutcome::Lost)
}

fn write_hints<W: Write>(
    output: &mut W,
    remaining: &[SecretCode],
    level: HintLevel,
) -> std::io::Result<()> {
    if level >= HintLevel::Count {
        if remaining.len() == 1 {
            writeln!(output, " Almost there - one option left...")?;
        } else {
            writeln!(
                output,
                " There are still {} combinations possible",
                remaining.len()
            )?;
        }
    }

    if level >= HintLevel::Full {
        writeln!(output, "  Possible options are:")?;
        for row in candidate_rows(remaining, CANDIDATES_PER_ROW) {
            writeln!(output, "   {row}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(config: &PlayConfig, input: &str) -> (GameOutcome, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let outcome = run_play(config, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn explicit(secret: &str) -> PlayConfig {
        PlayConfig::new(SecretSelection::Explicit(secret.to_string()))
    }

    #[test]
    fn winning_game() {
        let (outcome, text) = play(&explicit("1234"), "5678\n1243\n1234\n");

        assert_eq!(outcome, GameOutcome::Won { attempts: 3 });
        assert!(text.contains("Guess #1  /5 '5678' has 0  Bulls & 0  Cows"));
        assert!(text.contains("Guess #2  /5 '1243' has 2  Bulls & 2  Cows"));
        assert!(text.contains("Congrats"));
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let (outcome, text) = play(&explicit("1234"), "12\n1123\n12a4\n1234\n");

        assert_eq!(outcome, GameOutcome::Won { attempts: 1 });
        assert!(text.contains("12 is not a valid guess"));
        assert!(text.contains("1123 is not a valid guess"));
        assert!(text.contains("12a4 is not a valid guess"));
    }

    #[test]
    fn running_out_of_attempts() {
        let mut config = explicit("1234");
        config.max_steps = 2;
        let (outcome, text) = play(&config, "5678\n9012\n1234\n");

        assert_eq!(outcome, GameOutcome::Lost);
        assert!(text.contains("Sorry. You reached max out of tries (2)"));
        assert!(text.contains("1234"));
    }

    #[test]
    fn quit_and_end_of_input() {
        let (outcome, text) = play(&explicit("1234"), "quit\n");
        assert_eq!(outcome, GameOutcome::Quit);
        assert!(text.contains("The secret was"));

        let (outcome, _) = play(&explicit("1234"), "5678\n");
        assert_eq!(outcome, GameOutcome::Quit);
    }

    #[test]
    fn hint_levels() {
        let mut config = explicit("12");
        config.hint_level = HintLevel::Off;
        let (_, text) = play(&config, "34\nq\n");
        assert!(!text.contains("combinations possible"));

        config.hint_level = HintLevel::Count;
        let (_, text) = play(&config, "34\nq\n");
        // Digits 0,1,2,5-9 remain: 8 * 7
        assert!(text.contains("There are still 56 combinations possible"));
        assert!(!text.contains("Possible options"));

        config.hint_level = HintLevel::Full;
        let (_, text) = play(&config, "34\nq\n");
        assert!(text.contains("Possible options are:"));
        assert!(text.contains("01 02 05 06 07 08 09 10 12 15"));
    }

    #[test]
    fn one_option_left_hint() {
        let mut config = explicit("12");
        config.hint_level = HintLevel::Count;
        let (_, text) = play(&config, "21\nq\n");
        assert!(text.contains("Almost there - one option left..."));
    }

    #[test]
    fn explicit_secret_length_wins() {
        let mut config = explicit("123");
        config.digit_count = Some(4);
        let (outcome, _) = play(&config, "123\n");
        assert_eq!(outcome, GameOutcome::Won { attempts: 1 });
    }

    #[test]
    fn digit_count_conflict_only_when_configured() {
        let secret = SecretCode::new("123").unwrap();

        assert_eq!(conflicting_digit_count(&secret, None), None);
        assert_eq!(conflicting_digit_count(&secret, Some(3)), None);
        assert_eq!(conflicting_digit_count(&secret, Some(4)), Some(4));
    }

    #[test]
    fn random_secret_uses_configured_or_default_length() {
        let selection = SecretSelection::Random { seed: Some(4) };
        assert_eq!(selection.resolve(None).unwrap().len(), DEFAULT_DIGITS);
        assert_eq!(selection.resolve(Some(6)).unwrap().len(), 6);
    }

    #[test]
    fn invalid_explicit_secret_is_an_error() {
        let config = explicit("1123");
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();
        assert!(run_play(&config, &mut input, &mut output).is_err());
    }

    #[test]
    fn random_secret_is_reproducible() {
        let selection = SecretSelection::Random { seed: Some(99) };
        let first = selection.resolve(Some(5)).unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(selection.resolve(Some(5)).unwrap(), first);
        assert!(selection.resolve(Some(0)).is_err());
    }

    #[test]
    fn random_game_can_be_won() {
        let selection = SecretSelection::Random { seed: Some(1) };
        let secret = selection.resolve(None).unwrap();

        let config = PlayConfig::new(selection);
        let (outcome, _) = play(&config, &format!("{secret}\n"));
        assert_eq!(outcome, GameOutcome::Won { attempts: 1 });
    }

    #[test]
    fn hint_level_from_number() {
        assert_eq!(HintLevel::from_level(0), HintLevel::Off);
        assert_eq!(HintLevel::from_level(1), HintLevel::Count);
        assert_eq!(HintLevel::from_level(2), HintLevel::Full);
        assert_eq!(HintLevel::from_level(7), HintLevel::Full);
    }
}
