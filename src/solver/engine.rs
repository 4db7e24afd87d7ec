//! Per-puzzle solving pipeline

use super::candidates::filter_candidates;
use super::config::SolverConfig;
use super::exclusive::select_exclusive;
use super::ranking::rank_solutions;
use super::scoring::Scorer;
use super::search::CombinationSearch;
use crate::core::{Puzzle, PuzzleError, PuzzleResult};
use log::info;
use std::time::Instant;

/// Main puzzle solver
///
/// Runs candidate filtering, the combination search, ranking and the exclusivity
/// filter for one puzzle at a time. Holds no per-puzzle state, so one solver can be
/// shared across threads.
pub struct PuzzleSolver<S: Scorer> {
    scorer: S,
    config: SolverConfig,
}

impl<S: Scorer> PuzzleSolver<S> {
    /// Create a new solver with the given scorer and configuration
    pub const fn new(scorer: S, config: SolverConfig) -> Self {
        Self { scorer, config }
    }

    /// Limits applied to every puzzle this solver handles
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve one puzzle
    ///
    /// An infeasible puzzle is not an error: it yields an empty result. Check
    /// [`PuzzleResult::is_complete`] to learn whether a cutoff fired.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::MissingCandidates` if the puzzle carries no candidate
    /// word list.
    ///
    /// # Examples
    /// ```
    /// use imbroglio_solver::core::{Puzzle, WordEntry};
    /// use imbroglio_solver::solver::{PuzzleSolver, SolverConfig, SquaredLength};
    ///
    /// let words = vec![
    ///     WordEntry::new(1, "Cats", "cats").unwrap(),
    ///     WordEntry::new(2, "A", "a").unwrap(),
    /// ];
    /// let puzzle = Puzzle::new(1, "2024-01-01", "tacas".chars()).unwrap().with_words(words);
    ///
    /// let solver = PuzzleSolver::new(SquaredLength, SolverConfig::default());
    /// let result = solver.solve(&puzzle).unwrap();
    ///
    /// assert_eq!(result.total_solutions, 1);
    /// assert_eq!(result.found_solutions[0].words, vec!["Cats", "A"]);
    /// assert_eq!(result.found_solutions[0].score, 17);
    /// ```
    pub fn solve(&self, puzzle: &Puzzle) -> Result<PuzzleResult, PuzzleError> {
        let started = Instant::now();
        let words = puzzle.candidates()?;
        let letters = puzzle.letter_multiset();

        let candidates = filter_candidates(&letters, words);
        let outcome = CombinationSearch::new(&letters, &candidates, self.config.limits()).run();

        let ranked = rank_solutions(&self.scorer, &outcome.solutions, self.config.best_n);
        let found_solutions = select_exclusive(ranked, self.config.final_count);

        let processing_time = started.elapsed().as_secs_f64();
        info!(
            "puzzle {} ({}): {} candidates, {} accepted, {} returned in {:.2}s (search {:.2}s)",
            puzzle.id,
            puzzle.date,
            candidates.len(),
            outcome.solutions.len(),
            found_solutions.len(),
            processing_time,
            outcome.elapsed.as_secs_f64()
        );

        Ok(PuzzleResult {
            puzzle_id: puzzle.id.clone(),
            date: puzzle.date.clone(),
            letters: puzzle.letters.clone(),
            original_solution: puzzle.solution.clone(),
            total_solutions: found_solutions.len(),
            found_solutions,
            processing_time,
            accepted_solutions: outcome.solutions.len(),
            budget_exhausted: outcome.budget_exhausted,
            cap_reached: outcome.cap_reached,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryId, WordEntry};
    use crate::solver::SquaredLength;
    use std::time::Duration;

    fn words(list: &[(&str, &str)]) -> Vec<WordEntry> {
        list.iter()
            .enumerate()
            .map(|(i, (word, normalized))| WordEntry::new(i as i64, *word, *normalized).unwrap())
            .collect()
    }

    fn setup_puzzle(letters: &str, list: &[(&str, &str)]) -> Puzzle {
        Puzzle::new(7, "2024-03-09", letters.chars())
            .unwrap()
            .with_words(words(list))
            .with_solution(vec!["GATOS".to_string(), "A".to_string()])
    }

    #[test]
    fn solves_and_ranks_puzzle() {
        let puzzle = setup_puzzle(
            "cat s a",
            &[("Cats", "cats"), ("Cat", "cat"), ("Sat", "sat"), ("As", "as"), ("A", "a")],
        );
        let config = SolverConfig {
            max_words: 2,
            ..SolverConfig::default()
        };
        let solver = PuzzleSolver::new(SquaredLength, config);

        let result = solver.solve(&puzzle).unwrap();

        assert_eq!(result.puzzle_id, EntryId::from(7));
        assert_eq!(result.accepted_solutions, 2);
        assert_eq!(result.total_solutions, 2);
        assert_eq!(result.found_solutions[0].words, vec!["Cats", "A"]);
        assert_eq!(result.found_solutions[0].score, 17);
        assert_eq!(result.found_solutions[1].normalized_words, vec!["cat", "as"]);
        assert_eq!(result.found_solutions[1].score, 13);
        assert_eq!(result.original_solution, vec!["GATOS", "A"]);
        assert!(result.is_complete());
    }

    #[test]
    fn exclusivity_applies_after_ranking() {
        let puzzle = setup_puzzle(
            "abcd",
            &[("ab", "ab"), ("cd", "cd"), ("abc", "abc"), ("d", "d"), ("a", "a"), ("bcd", "bcd")],
        );
        let solver = PuzzleSolver::new(SquaredLength, SolverConfig::default());

        let result = solver.solve(&puzzle).unwrap();

        // abc+d (10), a+bcd (10), ab+cd (8); the third shares nothing with the others
        assert_eq!(result.accepted_solutions, 3);
        let picked: Vec<Vec<String>> = result
            .found_solutions
            .iter()
            .map(|s| s.normalized_words.clone())
            .collect();
        assert_eq!(picked, vec![vec!["abc", "d"], vec!["a", "bcd"], vec!["ab", "cd"]]);
    }

    #[test]
    fn final_count_limits_output() {
        let puzzle = setup_puzzle("ab", &[("ab", "ab"), ("ba", "ba"), ("a", "a"), ("b", "b")]);
        let config = SolverConfig {
            final_count: 1,
            ..SolverConfig::default()
        };
        let result = PuzzleSolver::new(SquaredLength, config).solve(&puzzle).unwrap();
        assert_eq!(result.total_solutions, 1);
        assert_eq!(result.accepted_solutions, 3);
    }

    #[test]
    fn refilters_supplied_words() {
        // Words that do not fit the letters are ignored even if supplied
        let puzzle = setup_puzzle("ab", &[("zz", "zz"), ("ab", "ab")]);
        let result = PuzzleSolver::new(SquaredLength, SolverConfig::default())
            .solve(&puzzle)
            .unwrap();
        assert_eq!(result.total_solutions, 1);
    }

    #[test]
    fn infeasible_puzzle_is_empty_not_error() {
        let puzzle = setup_puzzle("xyz", &[("ab", "ab")]);
        let result = PuzzleSolver::new(SquaredLength, SolverConfig::default())
            .solve(&puzzle)
            .unwrap();
        assert_eq!(result.total_solutions, 0);
        assert!(result.found_solutions.is_empty());
        assert!(result.is_complete());
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let puzzle = Puzzle::new(3, "d", "ab".chars()).unwrap();
        let result = PuzzleSolver::new(SquaredLength, SolverConfig::default()).solve(&puzzle);
        assert!(matches!(result, Err(PuzzleError::MissingCandidates(_))));
    }

    #[test]
    fn solver_exposes_its_config() {
        let config = SolverConfig {
            final_count: 5,
            ..SolverConfig::default()
        };
        let solver = PuzzleSolver::new(SquaredLength, config);
        assert_eq!(solver.config().final_count, 5);
        assert_eq!(solver.config().max_words, SolverConfig::default().max_words);
    }

    #[test]
    fn very_long_word_scores_without_overflow() {
        let long = "a".repeat(65_536);
        let puzzle = Puzzle::new(8, "2024-03-10", long.chars())
            .unwrap()
            .with_words(words(&[(long.as_str(), long.as_str())]));

        let result = PuzzleSolver::new(SquaredLength, SolverConfig::default())
            .solve(&puzzle)
            .unwrap();
        assert_eq!(result.total_solutions, 1);
        assert_eq!(result.found_solutions[0].score, 4_294_967_296);
    }

    #[test]
    fn exact_cap_on_exhaustive_search_is_complete() {
        let puzzle = setup_puzzle("ab", &[("ab", "ab")]);
        let config = SolverConfig {
            max_solutions: 1,
            ..SolverConfig::default()
        };
        let result = PuzzleSolver::new(SquaredLength, config).solve(&puzzle).unwrap();
        assert_eq!(result.accepted_solutions, 1);
        assert!(!result.cap_reached);
        assert!(result.is_complete());
    }

    #[test]
    fn zero_time_limit_flags_budget() {
        let puzzle = setup_puzzle("ab", &[("ab", "ab")]);
        let config = SolverConfig {
            time_limit: Duration::ZERO,
            ..SolverConfig::default()
        };
        let result = PuzzleSolver::new(SquaredLength, config).solve(&puzzle).unwrap();
        assert!(result.budget_exhausted);
        assert!(!result.is_complete());
        assert_eq!(result.total_solutions, 0);
    }
}
