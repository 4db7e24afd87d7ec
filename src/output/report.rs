//! Plain-text report of the best solutions per puzzle

use super::formatters::{letters_list, solution_lines};
use crate::core::BatchResults;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Solutions listed per puzzle in the text report
pub const REPORT_TOP: usize = 15;

const SEPARATOR: &str = "==============================";

/// Write one block per puzzle that has solutions
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_report<W: Write>(out: &mut W, results: &BatchResults, top: usize) -> io::Result<()> {
    for result in results.results.iter().filter(|r| !r.found_solutions.is_empty()) {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "Puzzle ID: {} | Date: {}", result.puzzle_id, result.date)?;
        writeln!(out, "Letters: {}", letters_list(&result.letters))?;
        writeln!(out, "Original solution: {}", result.original_solution.join(" + "))?;
        writeln!(out, "Total solutions found: {}", result.total_solutions)?;
        writeln!(out, "Top {} solutions:", top.min(result.found_solutions.len()))?;
        for line in solution_lines(&result.found_solutions, top) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Append the report to `path`, creating the file if needed
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or written.
pub fn append_report<P: AsRef<Path>>(path: P, results: &BatchResults, top: usize) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, results, top)?;
    out.flush()
}
