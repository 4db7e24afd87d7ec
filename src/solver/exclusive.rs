//! Word-exclusive selection
//!
//! Picks the final solutions for a puzzle so that no word appears in two of them.

use crate::core::ScoredSolution;
use rustc_hash::FxHashSet;

/// Greedily keep ranked solutions whose words are all unused so far
///
/// Scans in rank order and stops after `max_final` picks. This favors score over
/// coverage: a lower-ranked solution is dropped as soon as it shares a word with a
/// higher-ranked pick, even if dropping the pick would have allowed more solutions.
///
/// # Examples
/// ```
/// use imbroglio_solver::core::ScoredSolution;
/// use imbroglio_solver::solver::select_exclusive;
///
/// fn solution(words: &[&str], score: u64) -> ScoredSolution {
///     ScoredSolution {
///         words: words.iter().map(|w| w.to_string()).collect(),
///         normalized_words: words.iter().map(|w| w.to_string()).collect(),
///         score,
///     }
/// }
///
/// let ranked = vec![
///     solution(&["cats", "a"], 17),
///     solution(&["cat", "as"], 13),
///     solution(&["a", "cast"], 17),
/// ];
///
/// let picked = select_exclusive(ranked, 20);
/// assert_eq!(picked.len(), 2);
/// assert_eq!(picked[1].normalized_words, vec!["cat", "as"]);
/// ```
#[must_use]
pub fn select_exclusive(ranked: Vec<ScoredSolution>, max_final: usize) -> Vec<ScoredSolution> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    let mut selected = Vec::new();

    for solution in ranked {
        if selected.len() >= max_final {
            break;
        }

        if solution.normalized_words.iter().any(|w| used.contains(w)) {
            continue;
        }

        used.extend(solution.normalized_words.iter().cloned());
        selected.push(solution);
    }

    selected
}
