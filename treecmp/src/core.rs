// src/core.rs
pub mod aggregator;
pub mod matcher;
pub mod resolver;
pub mod scanner;
pub mod similarity;

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

use crate::core::matcher::PatternSet;
use crate::core::scanner::{ScanOptions, enumerate_with};
use crate::models::{AggregateResult, Method, OneSidedPolicy};

/// Settings for one comparison run.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineOptions {
    pub method: Method,
    pub one_sided: OneSidedPolicy,
    pub scan: ScanOptions,
    /// Worker threads; `0` means one per core.
    pub jobs: usize,
}

/// Compares two checked-out trees.
///
/// Both sides are walked with the same pattern set, paired by relative path,
/// scored on a dedicated worker pool and aggregated.
///
/// # Errors
///
/// This function may return an error if:
/// * Either root is missing or is not a directory
/// * The worker pool cannot be created
#[inline]
pub fn compare_trees(
    left_root: &Path,
    right_root: &Path,
    pattern_set: &PatternSet,
    options: EngineOptions,
) -> Result<AggregateResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .context("Failed to build the comparison worker pool")?;

    pool.install(|| {
        let left = enumerate_with(left_root, pattern_set, options.scan)?;
        let right = enumerate_with(right_root, pattern_set, options.scan)?;
        info!(left = left.len(), right = right.len(), "enumerated trees");

        let pairs = resolver::resolve(left, right);
        Ok(aggregator::aggregate(pairs, options.method, options.one_sided))
    })
}
