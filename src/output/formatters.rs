//! Formatting utilities for terminal output

use crate::core::{Score, SecretCode};

/// Format a score as emoji: 🐂 per bull, 🐄 per cow, ⬜ per miss
#[must_use]
pub fn score_to_emoji(score: Score) -> String {
    let mut result = String::with_capacity(score.total() * 4);
    for _ in 0..score.bulls() {
        result.push('🐂');
    }
    for _ in 0..score.cows() {
        result.push('🐄');
    }
    for _ in 0..score.none() {
        result.push('⬜');
    }
    result
}

/// One line of game feedback, e.g. "Guess #2  /5 '1243' has 2  Bulls & 2  Cows"
#[must_use]
pub fn guess_line(step: usize, max_steps: usize, guess: &str, score: Score) -> String {
    format!(
        "Guess #{step:<3}/{max_steps} '{guess}' has {:<2} Bulls & {:<2} Cows",
        score.bulls(),
        score.cows()
    )
}

/// Lay codes out in rows of `per_row`, separated by spaces
#[must_use]
pub fn candidate_rows(codes: &[SecretCode], per_row: usize) -> Vec<String> {
    codes
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar, scaled to the most any guess could achieve
///
/// A guess can produce at most `n_scores` distinct scores, so entropy is
/// bounded by log2 of that.
#[must_use]
pub fn entropy_bar(entropy: f64, n_scores: usize, width: usize) -> String {
    let max_entropy = (n_scores.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Number of distinct scores possible for `digit_count` digits
///
/// A (bulls, cows) pair is reachable unless it has n-1 bulls and one cow, or
/// leaves more misses than there are unused digits.
#[must_use]
pub fn possible_scores(digit_count: usize) -> usize {
    let min_matched = (2 * digit_count).saturating_sub(10);
    (0..=digit_count)
        .flat_map(|bulls| (0..=digit_count - bulls).map(move |cows| (bulls, cows)))
        .filter(|&(bulls, cows)| bulls + cows >= min_matched)
        .filter(|&(bulls, cows)| !(cows == 1 && bulls + 1 == digit_count))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_to_emoji_mixed() {
        assert_eq!(score_to_emoji(Score::new(1, 2, 1)), "🐂🐄🐄⬜");
        assert_eq!(score_to_emoji(Score::new(0, 0, 3)), "⬜⬜⬜");
    }

    #[test]
    fn guess_line_layout() {
        assert_eq!(
            guess_line(2, 5, "1243", Score::new(2, 2, 0)),
            "Guess #2  /5 '1243' has 2  Bulls & 2  Cows"
        );
    }

    #[test]
    fn candidate_rows_chunking() {
        let codes: Vec<SecretCode> = ["01", "02", "03"]
            .iter()
            .map(|t| SecretCode::new(t).unwrap())
            .collect();
        assert_eq!(candidate_rows(&codes, 2), ["01 02", "03"]);
        assert!(candidate_rows(&[], 2).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn possible_score_counts() {
        // Known: 14 distinct scores for four digits
        assert_eq!(possible_scores(4), 14);
        assert_eq!(possible_scores(1), 2);
        // All ten digits used: only bulls vary, never exactly nine
        assert_eq!(possible_scores(10), 10);
    }

    #[test]
    fn possible_scores_match_partitions() {
        use crate::solver::partition::partition_counts;
        use crate::tracker::all_codes;

        let universe = all_codes(4).unwrap();
        let counts = partition_counts(&universe[0], &universe);
        assert_eq!(counts.len(), possible_scores(4));
    }
}
