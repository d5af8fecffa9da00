//! Assistant mode
//!
//! The solver suggests guesses for a game played elsewhere; the player types
//! back the bulls and cows each guess received.

use super::read_input;
use crate::core::{Score, SecretCode};
use crate::output::formatters::score_to_emoji;
use crate::solver::{Solver, Strategy, calculate_metrics};
use crate::tracker::CandidateSet;
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

/// Candidates are listed once this few remain
const SHOW_CANDIDATES_BELOW: usize = 10;

/// Feedback typed after a suggestion
enum Feedback {
    Score(Score),
    Undo,
    NewGame,
    Quit,
}

/// Run the assistant loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_assist<S, R, W>(solver: &Solver<S>, input: &mut R, output: &mut W) -> Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let digit_count = solver.digit_count();

    writeln!(
        output,
        "{}",
        format!("Bulls and Cows assistant ({digit_count} digits)")
            .bright_cyan()
            .bold()
    )?;
    writeln!(output, "After each guess, enter its score as bulls then cows:")?;
    writeln!(output, "  - \"1 2\" or \"1b2c\" for one bull and two cows")?;
    writeln!(output, "  - 'win' if the guess was right")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'\n")?;

    let mut history: Vec<(SecretCode, Score)> = Vec::new();
    let mut candidates = fresh_candidates(solver)?;

    loop {
        let turn = history.len() + 1;

        let Some(guess) = solver.next_guess(candidates.as_slice()) else {
            writeln!(
                output,
                "{}",
                "No candidates remain! Some feedback must have been wrong.".red()
            )?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.")?;

            match read_input(input, output, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(()),
                Some("undo" | "u") => {
                    undo(&mut history, &mut candidates, solver, output)?;
                }
                Some("new" | "n") => {
                    history.clear();
                    candidates = fresh_candidates(solver)?;
                    writeln!(output, "New game started!\n")?;
                }
                Some(_) => {}
            }
            continue;
        };

        let metrics = calculate_metrics(&guess, candidates.as_slice());
        writeln!(output, "{}", "─".repeat(50))?;
        writeln!(
            output,
            "Turn {turn}: {} candidates remaining",
            candidates.len()
        )?;
        writeln!(output, "Suggested guess: {}", guess.to_string().bold())?;
        writeln!(output, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(
            output,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(
            output,
            "   Worst case:       {} candidates",
            metrics.max_partition
        )?;

        if candidates.len() <= SHOW_CANDIDATES_BELOW {
            let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
            writeln!(output, "Remaining: {}", listed.join(" "))?;
        }

        let feedback = loop {
            let Some(line) = read_input(input, output, "Score (bulls cows, 'win', or command)")?
            else {
                break Feedback::Quit;
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => break Feedback::Quit,
                "new" | "n" => break Feedback::NewGame,
                "undo" | "u" => break Feedback::Undo,
                "win" | "correct" | "solved" => break Feedback::Score(Score::solved(digit_count)),
                other => match Score::from_feedback(other, digit_count) {
                    Some(score) => break Feedback::Score(score),
                    None => writeln!(
                        output,
                        "{}",
                        format!("Invalid score! Bulls and cows must add up to at most {digit_count}.")
                            .red()
                    )?,
                },
            }
        };

        match feedback {
            Feedback::Quit => {
                writeln!(output, "\nThanks for playing!")?;
                return Ok(());
            }
            Feedback::NewGame => {
                history.clear();
                candidates = fresh_candidates(solver)?;
                writeln!(output, "New game started!\n")?;
            }
            Feedback::Undo => undo(&mut history, &mut candidates, solver, output)?,
            Feedback::Score(score) => {
                candidates
                    .retain_consistent(&guess, score)
                    .context("Suggested guess has the wrong length")?;
                history.push((guess, score));

                if score.is_perfect() {
                    write_victory(&history, output)?;

                    let again = read_input(input, output, "Play again? (yes/no)")?;
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        writeln!(output, "\nThanks for playing!")?;
                        return Ok(());
                    }
                    history.clear();
                    candidates = fresh_candidates(solver)?;
                    writeln!(output, "New game started!\n")?;
                }
            }
        }
    }
}

fn fresh_candidates<S: Strategy>(solver: &Solver<S>) -> Result<CandidateSet> {
    CandidateSet::from_codes(solver.digit_count(), solver.universe().to_vec())
        .context("Cannot build the candidate set")
}

/// Drop the last feedback and rebuild the candidates from what remains
fn undo<S: Strategy, W: Write>(
    history: &mut Vec<(SecretCode, Score)>,
    candidates: &mut CandidateSet,
    solver: &Solver<S>,
    output: &mut W,
) -> Result<()> {
    if history.pop().is_none() {
        writeln!(output, "Nothing to undo!")?;
        return Ok(());
    }

    let mut rebuilt = fresh_candidates(solver)?;
    for (guess, score) in history.iter() {
        rebuilt.retain_consistent(guess, *score)?;
    }
    debug!("Undo replayed {} guesses", history.len());
    *candidates = rebuilt;

    writeln!(output, "Undone! Back to turn {}", history.len() + 1)?;
    Ok(())
}

fn write_victory<W: Write>(history: &[(SecretCode, Score)], output: &mut W) -> Result<()> {
    let guesses = history.len();
    writeln!(output, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(output, "{}", "  SOLVED!".bright_green().bold())?;
    writeln!(
        output,
        "  Solution found in {guesses} {}",
        if guesses == 1 { "guess" } else { "guesses" }
    )?;
    for (i, (guess, score)) in history.iter().enumerate() {
        writeln!(output, "    {}. {guess} {}", i + 1, score_to_emoji(*score))?;
    }
    writeln!(output, "{}", "═".repeat(50).bright_cyan())?;
    Ok(())
}
