//! Batch solving
//!
//! Runs the per-puzzle pipeline over a list of puzzles and collects the results in
//! input order.

use crate::core::{BatchResults, Puzzle, PuzzleError};
use crate::solver::{PuzzleSolver, Scorer};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// How a batch is executed
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Solve puzzles on the rayon thread pool instead of one by one
    pub parallel: bool,
    pub show_progress: bool,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Solve every puzzle
///
/// Every puzzle must carry its candidate list and a unique id, since results are
/// keyed by id; both are checked for the whole batch before any search starts.
/// Each puzzle gets its own letter multiset, so parallel runs share only the
/// read-only word lists.
///
/// # Errors
///
/// Returns `PuzzleError::MissingCandidates` for the first puzzle without candidates,
/// or `PuzzleError::DuplicateId` for the first id seen twice.
pub fn run_batch<S: Scorer + Sync>(
    solver: &PuzzleSolver<S>,
    puzzles: &[Puzzle],
    options: BatchOptions,
) -> Result<BatchResults, PuzzleError> {
    let mut seen = FxHashSet::default();
    for puzzle in puzzles {
        puzzle.candidates()?;
        if !seen.insert(&puzzle.id) {
            return Err(PuzzleError::DuplicateId(puzzle.id.clone()));
        }
    }

    let pb = progress_bar(puzzles.len(), options.show_progress);
    let started = Instant::now();

    let solve_one = |puzzle: &Puzzle| {
        pb.set_message(format!("puzzle {}", puzzle.id));
        let result = solver.solve(puzzle);
        pb.inc(1);
        result
    };

    let results = if options.parallel {
        puzzles.par_iter().map(solve_one).collect::<Result<Vec<_>, _>>()?
    } else {
        puzzles.iter().map(solve_one).collect::<Result<Vec<_>, _>>()?
    };

    pb.finish_with_message("Complete!");
    info!(
        "solved {} puzzles in {:.2}s",
        results.len(),
        started.elapsed().as_secs_f64()
    );

    Ok(BatchResults { results })
}
