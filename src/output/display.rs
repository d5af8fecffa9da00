//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, possible_scores, score_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess,
            step.score,
            score_to_emoji(step.score)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(
        result.metrics.entropy,
        possible_scores(result.guess.len()),
        30,
    );

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );

    println!("\n📈 {}", "Score partitions:".bright_cyan().bold());
    let largest = result.partitions.first().map_or(0, |(_, n)| *n);
    for (score, count) in &result.partitions {
        let bar = create_progress_bar(*count as f64, largest as f64, 30);
        println!("   {:>6}  {} {count:5}", score.to_string(), bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_games);
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    if let Some((secret, _)) = result.hardest {
        println!("   Hardest secret:   {secret}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = ((pct / 2.5) as usize).min(40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
