//! JSON loading and saving
//!
//! Every input file is a JSON array of records. Records are validated one by one so
//! a malformed entry aborts the load with its index instead of being skipped.

use crate::core::{EntryId, Puzzle, WordEntry};
use log::info;
use rustc_hash::FxHashSet;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Error type for reading and writing data files
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Record {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "{}: invalid JSON: {source}", path.display()),
            Self::Record {
                path,
                index,
                source,
            } => write!(
                f,
                "{}: malformed record at index {index}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } | Self::Record { source, .. } => Some(source),
        }
    }
}

/// Deny-list records only need an id; other fields are ignored
#[derive(serde::Deserialize)]
struct DenyRecord {
    id: EntryId,
}

/// Load a JSON array of records, failing on the first malformed one
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read, is not a JSON array, or any
/// record does not match `T`.
pub fn load_records<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, DatasetError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| DatasetError::Record {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// Load a dictionary of `{ id, word, normalized }` entries
///
/// # Errors
///
/// Returns `DatasetError` on I/O failure or the first malformed entry.
///
/// # Examples
/// ```no_run
/// use imbroglio_solver::dataset::loader::load_dictionary;
///
/// let words = load_dictionary("data/words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, DatasetError> {
    let words: Vec<WordEntry> = load_records(&path)?;
    info!("loaded {} dictionary words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Load puzzles, with or without candidate word lists
///
/// # Errors
///
/// Returns `DatasetError` on I/O failure or the first malformed puzzle.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, DatasetError> {
    let puzzles: Vec<Puzzle> = load_records(&path)?;
    info!("loaded {} puzzles from {}", puzzles.len(), path.as_ref().display());
    Ok(puzzles)
}

/// Load the ids of dictionary entries to remove
///
/// # Errors
///
/// Returns `DatasetError` on I/O failure or a record without an `id`.
pub fn load_deny_list<P: AsRef<Path>>(path: P) -> Result<FxHashSet<EntryId>, DatasetError> {
    let records: Vec<DenyRecord> = load_records(path)?;
    Ok(records.into_iter().map(|r| r.id).collect())
}

/// Write `value` as pretty JSON, replacing `path` atomically
///
/// The data goes to a temporary file in the same directory first, so readers never
/// observe a half-written file.
///
/// # Errors
///
/// Returns `DatasetError` if the directory cannot be written or serialization fails.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    path: P,
    value: &T,
) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error)?;

    let temp_file = NamedTempFile::new_in(parent).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
            DatasetError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)?;
    }
    temp_file.persist(path).map_err(|e| io_error(e.error))?;

    info!("wrote {}", path.display());
    Ok(())
}
