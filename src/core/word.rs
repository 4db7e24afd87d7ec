//! Dictionary word representation
//!
//! A `WordEntry` pairs the display spelling (accents and case preserved) with the
//! normalized form the search works on, plus precomputed letter counts.

use super::letters::letter_counts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a dictionary entry or puzzle
///
/// Upstream data uses both integer and string ids, so both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for EntryId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Error type for invalid dictionary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    BlankWord,
    BlankNormalized,
    WhitespaceInNormalized(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankWord => write!(f, "dictionary entry has an empty display word"),
            Self::BlankNormalized => write!(f, "dictionary entry has an empty normalized form"),
            Self::WhitespaceInNormalized(word) => {
                write!(f, "normalized form '{word}' contains whitespace")
            }
        }
    }
}

impl std::error::Error for EntryError {}

/// Wire shape of a dictionary entry: `{ id, word, normalized }`
#[derive(Debug, Clone, Deserialize)]
pub struct RawWordEntry {
    pub id: EntryId,
    pub word: String,
    pub normalized: String,
}

/// An immutable dictionary word
///
/// Search and results hold `&WordEntry` references into the dictionary; entries are
/// never copied once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordEntry")]
pub struct WordEntry {
    id: EntryId,
    word: String,
    normalized: String,
    #[serde(skip)]
    letters: Vec<(char, u32)>,
    #[serde(skip)]
    len: usize,
}

impl TryFrom<RawWordEntry> for WordEntry {
    type Error = EntryError;

    fn try_from(raw: RawWordEntry) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.word, raw.normalized)
    }
}

impl WordEntry {
    /// Create a new entry, lowercasing the normalized form
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The display word is empty
    /// - The normalized form is empty
    /// - The normalized form contains whitespace
    ///
    /// # Examples
    /// ```
    /// use imbroglio_solver::core::WordEntry;
    ///
    /// let entry = WordEntry::new(7, "Ação", "ACAO").unwrap();
    /// assert_eq!(entry.word(), "Ação");
    /// assert_eq!(entry.normalized(), "acao");
    /// assert_eq!(entry.len(), 4);
    ///
    /// assert!(WordEntry::new(8, "x", "").is_err());
    /// ```
    pub fn new(
        id: impl Into<EntryId>,
        word: impl Into<String>,
        normalized: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let word: String = word.into();
        let normalized: String = normalized.into().to_lowercase();

        if word.trim().is_empty() {
            return Err(EntryError::BlankWord);
        }
        if normalized.is_empty() {
            return Err(EntryError::BlankNormalized);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(EntryError::WhitespaceInNormalized(normalized));
        }

        let letters = letter_counts(&normalized);
        let len = normalized.chars().count();

        Ok(Self {
            id: id.into(),
            word,
            normalized,
            letters,
            len,
        })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> &EntryId {
        &self.id
    }

    /// Display spelling, used in output only
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Normalized spelling, used for letter accounting, scoring and dedup
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Letter counts of the normalized form, sorted by letter
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[(char, u32)] {
        &self.letters
    }

    /// Number of letters in the normalized form
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
