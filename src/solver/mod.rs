//! Puzzle solving algorithms
//!
//! Candidate filtering, the backtracking combination search, scoring, ranking and
//! the word-exclusive final selection.

mod candidates;
mod config;
mod engine;
mod exclusive;
mod ranking;
mod scoring;
mod search;

pub use candidates::filter_candidates;
pub use config::{SearchLimits, SolverConfig};
pub use engine::PuzzleSolver;
pub use exclusive::select_exclusive;
pub use ranking::rank_solutions;
pub use scoring::{Scorer, SquaredLength};
pub use search::{CombinationSearch, SearchOutcome, Solution};
