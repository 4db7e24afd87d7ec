//! Dictionary pruning by deny-list

use crate::core::{EntryId, WordEntry};
use rustc_hash::FxHashSet;

/// Result of pruning a dictionary
#[derive(Debug, Clone)]
pub struct PruneReport {
    pub kept: Vec<WordEntry>,
    pub original_count: usize,
    pub removed_count: usize,
}

/// Drop every entry whose id is on the deny-list, preserving order
#[must_use]
pub fn prune_dictionary(words: Vec<WordEntry>, deny_ids: &FxHashSet<EntryId>) -> PruneReport {
    let original_count = words.len();
    let kept: Vec<WordEntry> = words
        .into_iter()
        .filter(|word| !deny_ids.contains(word.id()))
        .collect();

    PruneReport {
        removed_count: original_count - kept.len(),
        original_count,
        kept,
    }
}
