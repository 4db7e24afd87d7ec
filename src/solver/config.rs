//! Solver configuration

use std::time::Duration;

/// Bounds consumed by the combination search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of words in one combination
    pub max_words: usize,
    /// Wall-clock budget for one puzzle's search
    pub time_limit: Duration,
    /// Stop exploring once this many distinct solutions were accepted
    pub max_solutions: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_words: 3,
            time_limit: Duration::from_secs(20),
            max_solutions: 3000,
        }
    }
}

/// Configuration for solving puzzles
///
/// Defaults match a thorough batch run: up to 3 words per solution, 20 seconds per
/// puzzle, 3000 accepted solutions, the best 1000 kept after ranking and 20
/// word-disjoint solutions returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_words: usize,
    pub time_limit: Duration,
    pub max_solutions: usize,
    /// Solutions kept after ranking, before the exclusivity filter
    pub best_n: usize,
    /// Word-disjoint solutions returned per puzzle
    pub final_count: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_words: self.max_words,
            time_limit: self.time_limit,
            max_solutions: self.max_solutions,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let limits = SearchLimits::default();
        Self {
            max_words: limits.max_words,
            time_limit: limits.time_limit,
            max_solutions: limits.max_solutions,
            best_n: 1000,
            final_count: 20,
        }
    }
}
