//! Candidate prefiltering
//!
//! Attaches to each puzzle the dictionary words formable from its letters, in the
//! order the search will later explore them.

use crate::core::{EntryId, Puzzle, WordEntry};
use crate::solver::filter_candidates;
use std::cmp::Reverse;

/// What prefiltering found for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefilterSummary {
    pub puzzle_id: EntryId,
    pub date: String,
    pub letters: Vec<char>,
    pub candidate_count: usize,
    /// Longest candidate by display spelling
    pub longest: Option<String>,
}

/// Replace every puzzle's candidate list with the feasible dictionary words
///
/// Candidates are ordered longest display spelling first, then alphabetically, so the
/// search tries long words before short ones.
pub fn attach_candidates(puzzles: &mut [Puzzle], dictionary: &[WordEntry]) -> Vec<PrefilterSummary> {
    puzzles
        .iter_mut()
        .map(|puzzle| {
            let letters = puzzle.letter_multiset();
            let mut words: Vec<WordEntry> = filter_candidates(&letters, dictionary)
                .into_iter()
                .cloned()
                .collect();
            words.sort_by(|a, b| {
                Reverse(a.word().chars().count())
                    .cmp(&Reverse(b.word().chars().count()))
                    .then_with(|| a.word().cmp(b.word()))
            });

            let summary = PrefilterSummary {
                puzzle_id: puzzle.id.clone(),
                date: puzzle.date.clone(),
                letters: puzzle.letters.clone(),
                candidate_count: words.len(),
                longest: words.first().map(|w| w.word().to_string()),
            };
            puzzle.words = Some(words);
            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[(&str, &str)]) -> Vec<WordEntry> {
        list.iter()
            .enumerate()
            .map(|(i, (word, normalized))| WordEntry::new(i as i64, *word, *normalized).unwrap())
            .collect()
    }

    #[test]
    fn attaches_sorted_candidates() {
        let dict = dictionary(&[
            ("as", "as"),
            ("dog", "dog"),
            ("cat", "cat"),
            ("a", "a"),
            ("cats", "cats"),
            ("act", "act"),
        ]);
        let mut puzzles = vec![Puzzle::new(1, "d", "catsa".chars()).unwrap()];

        let summaries = attach_candidates(&mut puzzles, &dict);

        let words: Vec<&str> = puzzles[0]
            .candidates()
            .unwrap()
            .iter()
            .map(WordEntry::word)
            .collect();
        assert_eq!(words, vec!["cats", "act", "cat", "as", "a"]);
        assert_eq!(summaries[0].candidate_count, 5);
        assert_eq!(summaries[0].longest.as_deref(), Some("cats"));
    }

    #[test]
    fn sorts_by_display_length_not_normalized() {
        let dict = dictionary(&[("ab", "ab"), ("a-b-c", "abc"), ("b c", "bc")]);
        let mut puzzles = vec![Puzzle::new(1, "d", "abc".chars()).unwrap()];

        attach_candidates(&mut puzzles, &dict);

        let words: Vec<&str> = puzzles[0]
            .candidates()
            .unwrap()
            .iter()
            .map(WordEntry::word)
            .collect();
        assert_eq!(words, vec!["a-b-c", "b c", "ab"]);
    }

    #[test]
    fn replaces_existing_words_and_handles_no_match() {
        let dict = dictionary(&[("zz", "zz")]);
        let mut puzzles = vec![
            Puzzle::new(1, "d", "ab".chars())
                .unwrap()
                .with_words(dictionary(&[("ab", "ab")])),
        ];

        let summaries = attach_candidates(&mut puzzles, &dict);

        assert!(puzzles[0].candidates().unwrap().is_empty());
        assert_eq!(summaries[0].candidate_count, 0);
        assert!(summaries[0].longest.is_none());
    }
}
