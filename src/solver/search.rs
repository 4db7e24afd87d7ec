//! Backtracking combination search
//!
//! Depth-first enumeration of word combinations that consume every letter exactly.
//! Each step consumes a word from the shared multiset, recurses, then restores it, so
//! sibling branches always see the letters their parent saw.
//!
//! Three soft cutoffs end the search early without error: the per-combination word
//! bound, the wall-clock budget and the accepted-solution cap. When the budget or the
//! cap fires, the solutions found are a prefix of the full exploration order.

use super::config::SearchLimits;
use crate::core::{LetterMultiset, WordEntry};
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// A combination of dictionary words that uses every letter exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<'a> {
    words: Vec<&'a WordEntry>,
}

impl<'a> Solution<'a> {
    #[must_use]
    pub const fn new(words: Vec<&'a WordEntry>) -> Self {
        Self { words }
    }

    /// Words in the order the search picked them
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a WordEntry] {
        &self.words
    }

    /// Sorted normalized forms; permutations of the same word set share this key
    #[must_use]
    pub fn canonical_key(&self) -> Vec<&'a str> {
        let mut key: Vec<&'a str> = self.words.iter().map(|w| w.normalized()).collect();
        key.sort_unstable();
        key
    }
}

/// Everything the search produced for one puzzle
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// Distinct solutions in discovery order
    pub solutions: Vec<Solution<'a>>,
    /// The time limit fired before exploration finished
    pub budget_exhausted: bool,
    /// The accepted-solution cap fired while unexplored branches remained
    pub cap_reached: bool,
    pub elapsed: Duration,
    /// Recursion entries, for diagnostics
    pub nodes_visited: u64,
}

impl SearchOutcome<'_> {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.budget_exhausted && !self.cap_reached
    }
}

/// Search state threaded through every recursive call
///
/// One instance per puzzle; nothing here is shared between puzzles, so independent
/// searches can run on separate threads over the same dictionary.
pub struct CombinationSearch<'a, 'c> {
    candidates: &'c [&'a WordEntry],
    limits: SearchLimits,
    remaining: LetterMultiset,
    path: Vec<&'a WordEntry>,
    seen: FxHashSet<Vec<&'a str>>,
    solutions: Vec<Solution<'a>>,
    started: Instant,
    timed_out: bool,
    capped: bool,
    nodes_visited: u64,
}

impl<'a, 'c> CombinationSearch<'a, 'c> {
    /// Prepare a search over `candidates`, explored in the given order
    #[must_use]
    pub fn new(
        letters: &LetterMultiset,
        candidates: &'c [&'a WordEntry],
        limits: SearchLimits,
    ) -> Self {
        Self {
            candidates,
            limits,
            remaining: letters.clone(),
            path: Vec::with_capacity(limits.max_words),
            seen: FxHashSet::default(),
            solutions: Vec::new(),
            started: Instant::now(),
            timed_out: false,
            capped: false,
            nodes_visited: 0,
        }
    }

    /// Run the search to completion or until a cutoff fires
    ///
    /// # Examples
    /// ```
    /// use imbroglio_solver::core::{LetterMultiset, WordEntry};
    /// use imbroglio_solver::solver::{CombinationSearch, SearchLimits};
    ///
    /// let dictionary = vec![
    ///     WordEntry::new(1, "cats", "cats").unwrap(),
    ///     WordEntry::new(2, "a", "a").unwrap(),
    /// ];
    /// let candidates: Vec<&WordEntry> = dictionary.iter().collect();
    /// let letters = LetterMultiset::from_letters("tacas".chars());
    ///
    /// let outcome = CombinationSearch::new(&letters, &candidates, SearchLimits::default()).run();
    /// assert_eq!(outcome.solutions.len(), 1);
    /// assert!(outcome.is_complete());
    /// ```
    #[must_use]
    pub fn run(mut self) -> SearchOutcome<'a> {
        self.started = Instant::now();
        let letter_total = self.remaining.len();

        if self.limits.max_solutions == 0 {
            self.capped = !self.remaining.is_empty() && !self.candidates.is_empty();
        } else if !self.remaining.is_empty() {
            self.descend();
        }
        debug_assert_eq!(self.remaining.len(), letter_total, "letters leaked");

        let elapsed = self.started.elapsed();

        if self.timed_out {
            warn!(
                "search budget of {:.1}s exhausted after {} solutions; results are partial",
                self.limits.time_limit.as_secs_f64(),
                self.solutions.len()
            );
        }
        debug!(
            "search over {} candidates: {} solutions, {} nodes in {:.3}s",
            self.candidates.len(),
            self.solutions.len(),
            self.nodes_visited,
            elapsed.as_secs_f64()
        );

        SearchOutcome {
            solutions: self.solutions,
            budget_exhausted: self.timed_out,
            cap_reached: self.capped,
            elapsed,
            nodes_visited: self.nodes_visited,
        }
    }

    fn descend(&mut self) {
        self.nodes_visited += 1;

        if self.started.elapsed() >= self.limits.time_limit {
            self.timed_out = true;
            return;
        }

        if self.remaining.is_empty() {
            self.accept();
            return;
        }

        if self.path.len() >= self.limits.max_words {
            return;
        }

        let candidates = self.candidates;
        for &word in candidates {
            if self.remaining.consume(word) {
                if self.solutions.len() >= self.limits.max_solutions {
                    self.remaining.restore(word);
                    self.capped = true;
                    return;
                }
                self.path.push(word);
                self.descend();
                self.path.pop();
                self.remaining.restore(word);
            }

            if self.should_stop() {
                return;
            }
        }
    }

    fn accept(&mut self) {
        let solution = Solution::new(self.path.clone());
        if self.seen.insert(solution.canonical_key()) {
            trace!(
                "accepted {:?}",
                solution.words().iter().map(|w| w.normalized()).collect::<Vec<_>>()
            );
            self.solutions.push(solution);
        }
    }

    /// A cutoff fired and every open frame must unwind
    fn should_stop(&self) -> bool {
        self.timed_out || self.capped
    }
}
