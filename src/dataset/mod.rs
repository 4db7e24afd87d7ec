//! Data files for the solver
//!
//! Dictionaries, puzzles, deny-lists and results are exchanged as JSON arrays or
//! objects on disk.

pub mod loader;

pub use loader::{
    DatasetError, load_deny_list, load_dictionary, load_puzzles, load_records, save_json,
};
