//! Solution scoring
//!
//! Defines the Scorer trait and the squared-length scorer used by the solver.

use crate::core::WordEntry;

/// Assigns a score to a combination of words; higher is better
pub trait Scorer {
    fn score(&self, words: &[&WordEntry]) -> u64;
}

/// Sum of squared normalized word lengths
///
/// Squaring rewards one long word over several short ones covering the same
/// letters: "cats" scores 16, "cat" + "s" scores 10. Saturates at `u64::MAX`.
///
/// # Examples
/// ```
/// use imbroglio_solver::core::WordEntry;
/// use imbroglio_solver::solver::{Scorer, SquaredLength};
///
/// let cat = WordEntry::new(1, "cat", "cat").unwrap();
/// let a = WordEntry::new(2, "a", "a").unwrap();
/// assert_eq!(SquaredLength.score(&[&cat, &a]), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredLength;

impl Scorer for SquaredLength {
    fn score(&self, words: &[&WordEntry]) -> u64 {
        words.iter().fold(0u64, |total, word| {
            let len = u64::try_from(word.len()).unwrap_or(u64::MAX);
            total.saturating_add(len.saturating_mul(len))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(normalized: &str) -> WordEntry {
        WordEntry::new(normalized, normalized, normalized).unwrap()
    }

    #[test]
    fn single_word_scores_length_squared() {
        assert_eq!(SquaredLength.score(&[&entry("cats")]), 16);
    }

    #[test]
    fn score_sums_over_words() {
        let cat = entry("cat");
        let as_ = entry("as");
        assert_eq!(SquaredLength.score(&[&cat, &as_]), 13);
    }

    #[test]
    fn score_is_order_independent() {
        let ab = entry("ab");
        let cde = entry("cde");
        let f = entry("f");
        assert_eq!(
            SquaredLength.score(&[&ab, &cde, &f]),
            SquaredLength.score(&[&f, &ab, &cde])
        );
    }

    #[test]
    fn score_uses_normalized_length() {
        // Display spelling may carry extra marks; only the normalized form counts
        let word = WordEntry::new(1, "pão-de-ló", "paodelo").unwrap();
        assert_eq!(SquaredLength.score(&[&word]), 49);
    }

    #[test]
    fn fewer_longer_words_beat_many_short_ones() {
        let cats = entry("cats");
        let cat = entry("cat");
        let s = entry("s");
        assert!(SquaredLength.score(&[&cats]) > SquaredLength.score(&[&cat, &s]));
    }

    #[test]
    fn long_words_do_not_overflow() {
        let long = "a".repeat(65_536);
        let word = entry(&long);
        assert_eq!(SquaredLength.score(&[&word]), 4_294_967_296);
        assert_eq!(SquaredLength.score(&[&word, &word]), 8_589_934_592);
    }

    #[test]
    fn empty_combination_scores_zero() {
        assert_eq!(SquaredLength.score(&[]), 0);
    }
}
