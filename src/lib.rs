//! Imbroglio Solver
//!
//! Solves letter-tiling puzzles: given a fixed bag of letters and a dictionary, find
//! word combinations that use every letter exactly once, rank them so that long words
//! win, and return a set of top solutions in which no word is used twice.
//!
//! # Quick Start
//!
//! ```rust
//! use imbroglio_solver::core::{Puzzle, WordEntry};
//! use imbroglio_solver::solver::{PuzzleSolver, SolverConfig, SquaredLength};
//!
//! let words = vec![
//!     WordEntry::new(1, "cats", "cats").unwrap(),
//!     WordEntry::new(2, "cat", "cat").unwrap(),
//!     WordEntry::new(3, "as", "as").unwrap(),
//!     WordEntry::new(4, "a", "a").unwrap(),
//! ];
//! let puzzle = Puzzle::new(1, "2024-01-01", "cat s a".chars())
//!     .unwrap()
//!     .with_words(words);
//!
//! let solver = PuzzleSolver::new(SquaredLength, SolverConfig::default());
//! let result = solver.solve(&puzzle).unwrap();
//!
//! // cats + a (17) outranks cat + as (13)
//! assert_eq!(result.found_solutions[0].words, vec!["cats", "a"]);
//! assert_eq!(result.found_solutions[1].words, vec!["cat", "as"]);
//! ```

// Core domain types
pub mod core;

// Search, scoring and selection
pub mod solver;

// JSON data files
pub mod dataset;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
