pub mod acquire;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod report;
pub mod utils;

use anyhow::{Context as _, Result};
use std::env;
use std::io::{self, Write};

pub use crate::cli::{Args, Command};
pub use crate::config::{Config, load_config, read_config};
pub use crate::core::aggregator::aggregate;
pub use crate::core::matcher::{PatternSet, matches};
pub use crate::core::resolver::resolve;
pub use crate::core::scanner::{ScanOptions, enumerate, enumerate_with};
pub use crate::core::similarity::{Similarity, compare, edit_distance};
pub use crate::core::{EngineOptions, compare_trees};
pub use crate::models::{
    AggregateResult, ComparisonPair, FileEntry, FileResult, Method, OneSidedPolicy, PairKind,
};
pub use crate::report::{Format, render};

/// Acquires both trees, compares them and returns the aggregate.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * A local tree does not exist or is not a directory
/// * A git checkout fails
#[inline]
pub fn execute(args: &Args) -> Result<AggregateResult> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            load_config(&cwd)?.unwrap_or_default()
        }
    }
    .apply_args(args);

    let mut pattern_set = config.pattern_set();
    let options = config.engine_options();

    let trees = match &args.command {
        Command::Dirs { left, right } => acquire::local(left, right)?,
        Command::Git {
            repo,
            left_rev,
            right_rev,
        } => {
            pattern_set.exclude(acquire::GIT_DIR_PATTERN);
            acquire::checkout_revisions(repo, left_rev, right_rev)
                .with_context(|| format!("Failed to check out {repo}"))?
        }
    };

    compare_trees(trees.left(), trees.right(), &pattern_set, options)
}

/// Runs a comparison and prints the report to stdout.
///
/// # Errors
///
/// Returns an error if the comparison fails or the report cannot be written.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_to(&args, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Runs a comparison and writes the report to `out`.
///
/// # Errors
///
/// Returns an error if the comparison fails or the report cannot be written.
#[inline]
pub fn run_to<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let result = execute(args)?;
    render(&result, args.format, out)
}
