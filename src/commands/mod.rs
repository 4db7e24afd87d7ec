//! Command implementations

pub mod prefilter;
pub mod prune;
pub mod solve;

pub use prefilter::{PrefilterSummary, attach_candidates};
pub use prune::{PruneReport, prune_dictionary};
pub use solve::{BatchOptions, run_batch};
