//! Terminal output formatting
//!
//! Display utilities for CLI results and the plain-text solutions report.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_batch_summary, print_prefilter_summary, print_prune_report, print_puzzle_result,
};
pub use report::{REPORT_TOP, append_report, write_report};
