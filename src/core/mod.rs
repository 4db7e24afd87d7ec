//! Core domain types for the letter-tiling puzzle
//!
//! Letters, dictionary words, puzzles and result records. Everything here is plain
//! data with serde derives; the search lives in [`crate::solver`].

mod letters;
mod puzzle;
mod word;

pub use letters::{LetterMultiset, letter_counts, normalize_letter};
pub use puzzle::{
    BatchResults, Puzzle, PuzzleError, PuzzleResult, RawPuzzle, ScoredSolution,
};
pub use word::{EntryError, EntryId, RawWordEntry, WordEntry};
