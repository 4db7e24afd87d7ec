//! Imbroglio Solver - CLI
//!
//! Prefilters dictionaries against daily puzzles, prunes unwanted words and solves
//! puzzle batches into ranked, word-disjoint solution sets.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use imbroglio_solver::{
    commands::{BatchOptions, attach_candidates, prune_dictionary, run_batch},
    dataset::{load_deny_list, load_dictionary, load_puzzles, save_json},
    output::{
        REPORT_TOP, append_report, print_batch_summary, print_prefilter_summary,
        print_prune_report, print_puzzle_result,
    },
    solver::{PuzzleSolver, SolverConfig, SquaredLength},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "imbroglio_solver",
    about = "Letter-tiling puzzle solver: exact word combinations, ranked and word-disjoint",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach the feasible dictionary words to every puzzle
    Prefilter {
        /// Puzzles JSON file
        #[arg(short, long)]
        puzzles: PathBuf,

        /// Dictionary JSON file
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Output puzzles file with candidate words
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Remove deny-listed words from a dictionary
    Prune {
        /// Dictionary JSON file
        #[arg(short, long)]
        dictionary: PathBuf,

        /// JSON list of entries to remove (matched by id)
        #[arg(long)]
        deny: PathBuf,

        /// Output file (default: rewrite the dictionary in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve prefiltered puzzles
    Solve {
        /// Prefiltered puzzles JSON file
        #[arg(short, long)]
        puzzles: PathBuf,

        /// Results JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Append the top solutions of every puzzle to this text file
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Solve puzzles in parallel
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Maximum words per solution
    #[arg(long, default_value_t = SolverConfig::default().max_words)]
    max_words: usize,

    /// Search time limit per puzzle, in seconds
    #[arg(long, default_value_t = SolverConfig::default().time_limit.as_secs_f64())]
    time_limit: f64,

    /// Stop searching a puzzle after this many distinct solutions
    #[arg(long, default_value_t = SolverConfig::default().max_solutions)]
    max_solutions: usize,

    /// Solutions kept after ranking
    #[arg(long, default_value_t = SolverConfig::default().best_n)]
    best: usize,

    /// Word-disjoint solutions returned per puzzle
    #[arg(long = "final", default_value_t = SolverConfig::default().final_count)]
    final_count: usize,
}

impl LimitArgs {
    fn to_config(&self) -> Result<SolverConfig> {
        let time_limit = Duration::try_from_secs_f64(self.time_limit)
            .with_context(|| format!("invalid time limit: {}", self.time_limit))?;

        Ok(SolverConfig {
            max_words: self.max_words,
            time_limit,
            max_solutions: self.max_solutions,
            best_n: self.best,
            final_count: self.final_count,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Prefilter {
            puzzles,
            dictionary,
            output,
        } => run_prefilter_command(&puzzles, &dictionary, &output),
        Commands::Prune {
            dictionary,
            deny,
            output,
        } => run_prune_command(&dictionary, &deny, output.as_deref().unwrap_or(&dictionary)),
        Commands::Solve {
            puzzles,
            output,
            report,
            parallel,
            limits,
        } => run_solve_command(&puzzles, &output, report.as_deref(), parallel, &limits),
    }
}

fn run_prefilter_command(puzzles_path: &Path, dictionary_path: &Path, output: &Path) -> Result<()> {
    let mut puzzles = load_puzzles(puzzles_path)?;
    let dictionary = load_dictionary(dictionary_path)?;

    let summaries = attach_candidates(&mut puzzles, &dictionary);
    for summary in &summaries {
        print_prefilter_summary(summary);
    }

    save_json(output, &puzzles)?;
    println!("\nSaved to: {}", output.display());
    Ok(())
}

fn run_prune_command(dictionary_path: &Path, deny_path: &Path, output: &Path) -> Result<()> {
    let words = load_dictionary(dictionary_path)?;
    let deny_ids = load_deny_list(deny_path)?;

    let report = prune_dictionary(words, &deny_ids);
    save_json(output, &report.kept)?;
    print_prune_report(&report);
    Ok(())
}

fn run_solve_command(
    puzzles_path: &Path,
    output: &Path,
    report: Option<&Path>,
    parallel: bool,
    limits: &LimitArgs,
) -> Result<()> {
    let config = limits.to_config()?;
    let puzzles = load_puzzles(puzzles_path)?;

    let solver = PuzzleSolver::new(SquaredLength, config);
    let options = BatchOptions {
        parallel,
        show_progress: true,
    };
    let results = run_batch(&solver, &puzzles, options)
        .with_context(|| format!("cannot solve {}", puzzles_path.display()))?;

    let final_count = solver.config().final_count;
    for result in &results.results {
        print_puzzle_result(result, final_count);
    }
    print_batch_summary(&results);

    save_json(output, &results)?;
    println!("\nResults saved to: {}", output.display());

    if let Some(path) = report {
        let top = REPORT_TOP.min(final_count);
        append_report(path, &results, top)
            .with_context(|| format!("cannot write report {}", path.display()))?;
        println!("Top {top} solutions appended to: {}", path.display());
    }

    Ok(())
}
