//! Puzzle input records and solver output records

use super::{EntryId, LetterMultiset, WordEntry};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Error type for invalid puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidLetter(String),
    NoLetters,
    MissingCandidates(EntryId),
    DuplicateId(EntryId),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(tile) => {
                write!(f, "letter tile '{tile}' must be exactly one character")
            }
            Self::NoLetters => write!(f, "puzzle has no letters"),
            Self::MissingCandidates(id) => write!(
                f,
                "puzzle {id} has no candidate word list; run prefilter first"
            ),
            Self::DuplicateId(id) => write!(f, "puzzle id {id} appears more than once"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Wire shape of a puzzle
#[derive(Debug, Clone, Deserialize)]
pub struct RawPuzzle {
    pub id: EntryId,
    pub date: String,
    pub letters: Vec<String>,
    #[serde(default)]
    pub solution: Vec<String>,
    #[serde(default)]
    pub words: Option<Vec<WordEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A daily puzzle: the letter tiles plus, once prefiltered, its candidate words
///
/// Fields the solver does not understand are kept in `extra` and written back
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle")]
pub struct Puzzle {
    pub id: EntryId,
    pub date: String,
    pub letters: Vec<char>,
    pub solution: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        let letters = raw
            .letters
            .iter()
            .map(|tile| {
                let mut chars = tile.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(PuzzleError::InvalidLetter(tile.clone())),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;

        let puzzle = Self {
            id: raw.id,
            date: raw.date,
            letters,
            solution: raw.solution,
            words: raw.words,
            extra: raw.extra,
        };

        if puzzle.letter_multiset().is_empty() {
            return Err(PuzzleError::NoLetters);
        }
        Ok(puzzle)
    }
}

impl Puzzle {
    /// Create a puzzle from tiles, without candidate words
    ///
    /// # Errors
    /// Returns `PuzzleError::NoLetters` if the tiles normalize to nothing.
    pub fn new(
        id: impl Into<EntryId>,
        date: impl Into<String>,
        letters: impl IntoIterator<Item = char>,
    ) -> Result<Self, PuzzleError> {
        let puzzle = Self {
            id: id.into(),
            date: date.into(),
            letters: letters.into_iter().collect(),
            solution: Vec::new(),
            words: None,
            extra: Map::new(),
        };

        if puzzle.letter_multiset().is_empty() {
            return Err(PuzzleError::NoLetters);
        }
        Ok(puzzle)
    }

    /// Attach the candidate word list
    #[must_use]
    pub fn with_words(mut self, words: Vec<WordEntry>) -> Self {
        self.words = Some(words);
        self
    }

    /// Attach the reference answer, carried through to the result untouched
    #[must_use]
    pub fn with_solution(mut self, solution: Vec<String>) -> Self {
        self.solution = solution;
        self
    }

    /// Fresh multiset of this puzzle's normalized letters
    #[must_use]
    pub fn letter_multiset(&self) -> LetterMultiset {
        LetterMultiset::from_letters(self.letters.iter().copied())
    }

    /// Candidate words supplied by the prefilter step
    ///
    /// # Errors
    /// Returns `PuzzleError::MissingCandidates` if the puzzle was never prefiltered.
    pub fn candidates(&self) -> Result<&[WordEntry], PuzzleError> {
        self.words
            .as_deref()
            .ok_or_else(|| PuzzleError::MissingCandidates(self.id.clone()))
    }
}

/// A ranked solution, flattened for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSolution {
    /// Display spellings, in the order the search chose them
    pub words: Vec<String>,
    pub normalized_words: Vec<String>,
    pub score: u64,
}

/// Outcome of solving one puzzle
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleResult {
    #[serde(skip)]
    pub puzzle_id: EntryId,
    pub date: String,
    pub letters: Vec<char>,
    pub original_solution: Vec<String>,
    pub found_solutions: Vec<ScoredSolution>,
    /// Wall-clock seconds spent on the puzzle
    pub processing_time: f64,
    /// Number of solutions returned after the exclusivity filter
    pub total_solutions: usize,
    /// Number of distinct solutions the search accepted before ranking
    pub accepted_solutions: usize,
    /// The time limit fired; the search was not exhaustive
    pub budget_exhausted: bool,
    /// The accepted-solution cap fired; the search was not exhaustive
    pub cap_reached: bool,
}

impl PuzzleResult {
    /// True when the search explored every combination within the word bound
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.budget_exhausted && !self.cap_reached
    }
}

/// Results of a batch, serialized as an object keyed by puzzle id in input order
#[derive(Debug, Clone, Default)]
pub struct BatchResults {
    pub results: Vec<PuzzleResult>,
}

impl BatchResults {
    #[must_use]
    pub fn get(&self, puzzle_id: &EntryId) -> Option<&PuzzleResult> {
        self.results.iter().find(|r| &r.puzzle_id == puzzle_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Serialize for BatchResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(&result.puzzle_id.to_string(), result)?;
        }
        map.end()
    }
}
