//! Formatting utilities for terminal and report output

use crate::core::ScoredSolution;

/// Format a ranked solution as `N. word + word (Score: S)`
#[must_use]
pub fn solution_line(rank: usize, solution: &ScoredSolution) -> String {
    format!(
        "{rank}. {} (Score: {})",
        solution.words.join(" + "),
        solution.score
    )
}

/// Format puzzle tiles as an uppercase comma-separated list
#[must_use]
pub fn letters_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(|ch| ch.to_uppercase().collect::<String>())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbered solution lines, at most `limit` of them
#[must_use]
pub fn solution_lines(solutions: &[ScoredSolution], limit: usize) -> Vec<String> {
    solutions
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, solution)| solution_line(i + 1, solution))
        .collect()
}
