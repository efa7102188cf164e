// src/config.rs
mod loader;

pub use loader::{CONFIG_FILE, load_config, read_config};

use serde::Deserialize;

use crate::cli::Args;
use crate::core::EngineOptions;
use crate::core::matcher::PatternSet;
use crate::core::scanner::ScanOptions;
use crate::models::{Method, OneSidedPolicy};

/// Settings read from `treecmp.toml`, later overridden by the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub method: Option<Method>,
    pub one_sided: Option<OneSidedPolicy>,
    pub skip_hidden: Option<bool>,
    pub jobs: Option<usize>,
}

impl Config {
    /// Lets command-line values replace file values. Non-empty pattern lists
    /// replace the file's lists rather than extending them.
    #[must_use]
    pub fn apply_args(mut self, args: &Args) -> Self {
        if !args.include.is_empty() {
            self.include.clone_from(&args.include);
        }
        if !args.exclude.is_empty() {
            self.exclude.clone_from(&args.exclude);
        }
        if args.method.is_some() {
            self.method = args.method;
        }
        if args.one_sided.is_some() {
            self.one_sided = args.one_sided;
        }
        if args.skip_hidden {
            self.skip_hidden = Some(true);
        }
        if args.jobs.is_some() {
            self.jobs = args.jobs;
        }
        self
    }

    #[must_use]
    pub fn pattern_set(&self) -> PatternSet {
        PatternSet::new(&self.include, &self.exclude)
    }

    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            method: self.method.unwrap_or_default(),
            one_sided: self.one_sided.unwrap_or_default(),
            scan: ScanOptions {
                skip_hidden: self.skip_hidden.unwrap_or(false),
            },
            jobs: self.jobs.unwrap_or(0),
        }
    }
}
