//! Solution ranking
//!
//! Scores each accepted solution once, orders by score and keeps the best N.

use super::scoring::Scorer;
use super::search::Solution;
use crate::core::ScoredSolution;
use std::cmp::Reverse;

/// Score, sort (best first) and truncate solutions
///
/// The sort is stable: equal scores keep their discovery order. Solutions are
/// expected to be already deduplicated by the search.
///
/// Note that when the search stopped early on its time budget or solution cap, the
/// ranked set only covers what was discovered before the cutoff, so the best N can
/// lean towards words early in the dictionary order.
#[must_use]
pub fn rank_solutions<S: Scorer>(
    scorer: &S,
    solutions: &[Solution<'_>],
    best_n: usize,
) -> Vec<ScoredSolution> {
    let mut scored: Vec<ScoredSolution> = solutions
        .iter()
        .map(|solution| ScoredSolution {
            words: solution.words().iter().map(|w| w.word().to_string()).collect(),
            normalized_words: solution
                .words()
                .iter()
                .map(|w| w.normalized().to_string())
                .collect(),
            score: scorer.score(solution.words()),
        })
        .collect();

    scored.sort_by_key(|s| Reverse(s.score));
    scored.truncate(best_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::solver::SquaredLength;

    fn dictionary(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| WordEntry::new(i as i64, w.to_uppercase(), *w).unwrap())
            .collect()
    }

    /// Scores every solution the same, to observe tie handling
    struct Flat;

    impl Scorer for Flat {
        fn score(&self, _words: &[&WordEntry]) -> u64 {
            1
        }
    }

    #[test]
    fn ranks_by_score_descending() {
        let dict = dictionary(&["a", "cats", "as", "cat"]);
        let solutions = vec![
            Solution::new(vec![&dict[2], &dict[3]]),
            Solution::new(vec![&dict[1], &dict[0]]),
        ];

        let ranked = rank_solutions(&SquaredLength, &solutions, 10);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].normalized_words, vec!["cats", "a"]);
        assert_eq!(ranked[0].words, vec!["CATS", "A"]);
        assert_eq!(ranked[0].score, 17);
        assert_eq!(ranked[1].normalized_words, vec!["as", "cat"]);
        assert_eq!(ranked[1].score, 13);
    }

    #[test]
    fn equal_scores_keep_discovery_order() {
        let dict = dictionary(&["ab", "cd", "ef", "gh"]);
        let solutions: Vec<Solution<'_>> =
            dict.iter().map(|w| Solution::new(vec![w])).collect();

        let ranked = rank_solutions(&Flat, &solutions, 10);
        let order: Vec<&str> = ranked.iter().map(|s| s.normalized_words[0].as_str()).collect();
        assert_eq!(order, vec!["ab", "cd", "ef", "gh"]);

        // Mixed scores: ties among the 2-letter words stay in input order
        let dict = dictionary(&["xy", "abc", "zw", "uv"]);
        let solutions: Vec<Solution<'_>> =
            dict.iter().map(|w| Solution::new(vec![w])).collect();
        let ranked = rank_solutions(&SquaredLength, &solutions, 10);
        let order: Vec<&str> = ranked.iter().map(|s| s.normalized_words[0].as_str()).collect();
        assert_eq!(order, vec!["abc", "xy", "zw", "uv"]);
    }

    #[test]
    fn truncates_to_best_n() {
        let dict = dictionary(&["a", "bb", "ccc", "dddd"]);
        let solutions: Vec<Solution<'_>> =
            dict.iter().map(|w| Solution::new(vec![w])).collect();

        let ranked = rank_solutions(&SquaredLength, &solutions, 2);
        let scores: Vec<u64> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![16, 9]);

        assert!(rank_solutions(&SquaredLength, &solutions, 0).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(rank_solutions(&SquaredLength, &[], 5).is_empty());
    }
}
