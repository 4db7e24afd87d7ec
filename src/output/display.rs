//! Display functions for command results

use super::formatters::{letters_list, solution_lines};
use crate::commands::{PrefilterSummary, PruneReport};
use crate::core::{BatchResults, PuzzleResult};
use colored::Colorize;

/// Print the outcome of one solved puzzle
pub fn print_puzzle_result(result: &PuzzleResult, top: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {} ({})",
        result.puzzle_id.to_string().bright_yellow().bold(),
        result.date
    );
    println!("{}", "─".repeat(60).cyan());

    println!("  Letters:          {}", letters_list(&result.letters));
    if !result.original_solution.is_empty() {
        println!("  Reference:        {}", result.original_solution.join(" + "));
    }
    println!("  Processing time:  {:.2}s", result.processing_time);
    println!(
        "  Solutions:        {} returned / {} accepted",
        result.total_solutions, result.accepted_solutions
    );

    if result.budget_exhausted {
        println!("  {}", "⏱ Time limit reached, search incomplete".yellow());
    }
    if result.cap_reached {
        println!("  {}", "✂ Solution cap reached, search incomplete".yellow());
    }

    if result.found_solutions.is_empty() {
        println!("\n{}", "❌ No solution found".red().bold());
        return;
    }

    let shown = top.min(result.found_solutions.len());
    println!("\n📊 {}", format!("Top {shown} solutions:").bright_cyan().bold());
    for line in solution_lines(&result.found_solutions, top) {
        println!("   {line}");
    }
}

/// Print a one-screen summary of a whole batch
pub fn print_batch_summary(results: &BatchResults) {
    let solved = results
        .results
        .iter()
        .filter(|r| !r.found_solutions.is_empty())
        .count();
    let partial = results.results.iter().filter(|r| !r.is_complete()).count();
    let total_time: f64 = results.results.iter().map(|r| r.processing_time).sum();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Puzzles:          {}", results.len());
    println!(
        "   With solutions:   {}",
        format!("{solved}").green()
    );
    if partial > 0 {
        println!(
            "   Partial searches: {}",
            format!("{partial}").yellow()
        );
    }
    println!("   Solve time:       {total_time:.2}s");
}

/// Print what prefiltering attached to each puzzle
pub fn print_prefilter_summary(summary: &PrefilterSummary) {
    println!(
        "\nPuzzle {} ({})",
        summary.puzzle_id.to_string().bright_yellow(),
        summary.date
    );
    println!("  Letters:     {}", letters_list(&summary.letters));
    println!("  Candidates:  {}", summary.candidate_count);
    if let Some(longest) = &summary.longest {
        println!(
            "  Longest:     {} ({} letters)",
            longest.bright_green(),
            longest.chars().count()
        );
    }
}

/// Print the result of pruning a dictionary
pub fn print_prune_report(report: &PruneReport) {
    println!(
        "Removed {} words",
        format!("{}", report.removed_count).bright_yellow().bold()
    );
    println!("  Original count: {}", report.original_count);
    println!("  New count:      {}", report.kept.len());
}
