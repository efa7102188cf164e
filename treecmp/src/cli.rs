// src/cli.rs
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{Method, OneSidedPolicy};
use crate::report::Format;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Only compare files matching these globs (comma-separated, e.g. "*.rs,*.sol")
    #[arg(short, long, value_delimiter = ',', global = true)]
    pub include: Vec<String>,

    /// Skip files matching these globs (comma-separated, e.g. "*/test/*")
    #[arg(short, long, value_delimiter = ',', global = true)]
    pub exclude: Vec<String>,

    /// Metric to report
    #[arg(short, long, value_enum, global = true)]
    pub method: Option<Method>,

    /// How to score files that exist on only one side
    #[arg(long, value_enum, global = true)]
    pub one_sided: Option<OneSidedPolicy>,

    /// Skip dot-files and dot-directories
    #[arg(long, global = true)]
    pub skip_hidden: bool,

    /// Worker threads (0 = one per core)
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: Format,

    /// Config file (defaults to the nearest treecmp.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare two local directories
    Dirs {
        /// Baseline tree
        left: PathBuf,
        /// Updated tree
        right: PathBuf,
    },
    /// Compare two revisions (commits, branches or tags) of a git repository
    Git {
        /// Repository URL or path
        repo: String,
        /// Baseline revision
        left_rev: String,
        /// Updated revision
        right_rev: String,
    },
}
