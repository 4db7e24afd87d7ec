//! Letter normalization and the letter multiset
//!
//! Puzzle tiles are a bag of case-normalized characters. The multiset tracks how many
//! of each letter remain while the search consumes and restores words.

use super::WordEntry;
use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize a raw tile or word character into zero or more letters
///
/// Whitespace carries no tile and yields nothing; everything else is lowercased.
pub fn normalize_letter(ch: char) -> impl Iterator<Item = char> {
    let keep = !ch.is_whitespace();
    ch.to_lowercase().filter(move |_| keep)
}

/// Count the letters of a normalized form
///
/// Returns `(letter, count)` pairs sorted by letter, so two words with the same
/// letters always produce the same vector.
#[must_use]
pub fn letter_counts(text: &str) -> Vec<(char, u32)> {
    let mut counts: FxHashMap<char, u32> = FxHashMap::default();
    for ch in text.chars().flat_map(normalize_letter) {
        *counts.entry(ch).or_insert(0) += 1;
    }

    let mut counts: Vec<(char, u32)> = counts.into_iter().collect();
    counts.sort_unstable_by_key(|&(ch, _)| ch);
    counts
}

/// A bag of available letters with per-letter counts
///
/// Mutated only by the search, which must call [`LetterMultiset::restore`] in exact
/// reverse order of successful [`LetterMultiset::consume`] calls.
///
/// # Examples
/// ```
/// use imbroglio_solver::core::{LetterMultiset, WordEntry};
///
/// let mut letters = LetterMultiset::from_letters(['c', 'a', 't', 's', 'a']);
/// let cat = WordEntry::new(1, "cat", "cat").unwrap();
///
/// assert!(letters.consume(&cat));
/// assert_eq!(letters.len(), 2);
/// letters.restore(&cat);
/// assert_eq!(letters.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LetterMultiset {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterMultiset {
    /// Build a multiset from raw tiles, normalizing case and dropping whitespace
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut multiset = Self::default();
        for ch in letters.into_iter().flat_map(normalize_letter) {
            *multiset.counts.entry(ch).or_insert(0) += 1;
            multiset.total += 1;
        }
        multiset
    }

    /// Remaining count of a single letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of unused letters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// True once every letter has been consumed
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether `word` could be formed from the current counts without mutating
    #[must_use]
    pub fn covers(&self, word: &WordEntry) -> bool {
        word.letters()
            .iter()
            .all(|&(letter, needed)| self.count(letter) >= needed)
    }

    /// Remove the letters of `word`
    ///
    /// Returns `false` and leaves the counts untouched if any letter would be overdrawn.
    pub fn consume(&mut self, word: &WordEntry) -> bool {
        if !self.covers(word) {
            return false;
        }

        for &(letter, needed) in word.letters() {
            if let Some(slot) = self.counts.get_mut(&letter) {
                *slot -= needed;
            }
        }
        self.total -= word.len();
        true
    }

    /// Give back the letters of a previously consumed `word`
    pub fn restore(&mut self, word: &WordEntry) {
        for &(letter, count) in word.letters() {
            *self.counts.entry(letter).or_insert(0) += count;
        }
        self.total += word.len();
    }
}

// Exhausted letters keep a zero entry, so compare by remaining counts only
impl PartialEq for LetterMultiset {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self
                .counts
                .iter()
                .all(|(&letter, &count)| other.count(letter) == count)
    }
}

impl Eq for LetterMultiset {}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, u32)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
            .collect();
        letters.sort_unstable_by_key(|&(letter, _)| letter);

        for (letter, count) in letters {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(normalized: &str) -> WordEntry {
        WordEntry::new(normalized, normalized, normalized).unwrap()
    }

    #[test]
    fn from_letters_normalizes_case_and_whitespace() {
        let letters = LetterMultiset::from_letters("Cat s A".chars());
        assert_eq!(letters.len(), 5);
        assert_eq!(letters.count('a'), 2);
        assert_eq!(letters.count('c'), 1);
        assert_eq!(letters.count(' '), 0);
        assert_eq!(letters.to_string(), "aacst");
    }

    #[test]
    fn letter_counts_sorted_and_grouped() {
        assert_eq!(letter_counts("banana"), vec![('a', 3), ('b', 1), ('n', 2)]);
        assert!(letter_counts("").is_empty());
    }

    #[test]
    fn consume_and_restore_round_trip() {
        let mut letters = LetterMultiset::from_letters("catsa".chars());
        let original = letters.clone();
        let cats = entry("cats");

        assert!(letters.consume(&cats));
        assert_eq!(letters.len(), 1);
        assert_eq!(letters.count('a'), 1);
        assert_eq!(letters.count('c'), 0);

        letters.restore(&cats);
        assert_eq!(letters, original);
    }

    #[test]
    fn consume_overdraw_leaves_counts_untouched() {
        let mut letters = LetterMultiset::from_letters("cat".chars());
        let before = letters.to_string();

        assert!(!letters.consume(&entry("catt")));
        assert!(!letters.consume(&entry("dog")));
        assert_eq!(letters.to_string(), before);
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn stacked_consumes_unwind_in_reverse() {
        let mut letters = LetterMultiset::from_letters("catsa".chars());
        let cat = entry("cat");
        let a = entry("a");
        let s = entry("s");

        assert!(letters.consume(&cat));
        assert!(letters.consume(&a));
        assert!(letters.consume(&s));
        assert!(letters.is_empty());
        assert!(!letters.consume(&a));

        letters.restore(&s);
        letters.restore(&a);
        letters.restore(&cat);
        assert_eq!(letters.to_string(), "aacst");
    }

    #[test]
    fn covers_does_not_mutate() {
        let letters = LetterMultiset::from_letters("aab".chars());
        assert!(letters.covers(&entry("aba")));
        assert!(!letters.covers(&entry("bb")));
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn equality_ignores_exhausted_letters() {
        let mut letters = LetterMultiset::from_letters("ab".chars());
        assert!(letters.consume(&entry("b")));
        assert_eq!(letters, LetterMultiset::from_letters("a".chars()));
        assert_ne!(letters, LetterMultiset::from_letters("ab".chars()));
    }

    #[test]
    fn empty_multiset() {
        let letters = LetterMultiset::from_letters(std::iter::empty());
        assert!(letters.is_empty());
        assert_eq!(letters.to_string(), "");
    }
}
