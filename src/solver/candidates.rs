//! Candidate word filtering
//!
//! Narrows a dictionary to the words formable from the full letter budget, once per
//! puzzle, before the search starts.

use crate::core::{LetterMultiset, WordEntry};

/// Keep the words whose letter needs fit within `letters`
///
/// This is a feasibility test against the full budget only; combinations are
/// checked later by the search. Dictionary order is preserved.
///
/// # Examples
/// ```
/// use imbroglio_solver::core::{LetterMultiset, WordEntry};
/// use imbroglio_solver::solver::filter_candidates;
///
/// let dictionary = vec![
///     WordEntry::new(1, "cat", "cat").unwrap(),
///     WordEntry::new(2, "dog", "dog").unwrap(),
///     WordEntry::new(3, "tact", "tact").unwrap(),
/// ];
/// let letters = LetterMultiset::from_letters("tacs".chars());
///
/// let candidates = filter_candidates(&letters, &dictionary);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].word(), "cat");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    letters: &LetterMultiset,
    dictionary: &'a [WordEntry],
) -> Vec<&'a WordEntry> {
    dictionary
        .iter()
        .filter(|&word| letters.covers(word))
        .collect()
}
