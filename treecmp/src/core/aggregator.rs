// src/core/aggregator.rs
use rayon::prelude::*;
use tracing::info;

use crate::core::similarity::{compare, ratio};
use crate::models::{AggregateResult, ComparisonPair, FileResult, Method, OneSidedPolicy, PairKind};
use crate::utils::count_lines;

pub const TOTAL_ROW: &str = "Total";

/// Scores every pair and adds the weighted total row.
///
/// Pairs are compared in parallel on the current rayon pool; rows are sorted
/// by path afterwards, so the output never depends on scheduling.
#[must_use]
pub fn aggregate(pairs: Vec<ComparisonPair>, method: Method, policy: OneSidedPolicy) -> AggregateResult {
    let mut rows: Vec<FileResult> = pairs
        .into_par_iter()
        .filter_map(|pair| {
            let kind = pair.kind();
            if kind == PairKind::Common {
                return Some(compare_pair(&pair));
            }
            match (kind, policy) {
                (PairKind::LeftOnly, OneSidedPolicy::Skip) => {
                    info!(path = pair.path(), "removed in the updated version; skipped");
                    None
                }
                (PairKind::RightOnly, OneSidedPolicy::Skip) => {
                    info!(path = pair.path(), "new file in the updated version; skipped");
                    None
                }
                (PairKind::LeftOnly, _) => {
                    info!(path = pair.path(), "removed in the updated version");
                    Some(compare_pair(&pair))
                }
                _ => {
                    info!(path = pair.path(), "new file in the updated version");
                    Some(compare_pair(&pair))
                }
            }
        })
        .collect();

    rows.sort_by(|a, b| a.path.cmp(&b.path));

    let count = |kind: PairKind| {
        let n = rows.iter().filter(|row| row.kind == Some(kind)).count();
        u64::try_from(n).unwrap_or(u64::MAX)
    };
    let (common, left_only, right_only) = (
        count(PairKind::Common),
        count(PairKind::LeftOnly),
        count(PairKind::RightOnly),
    );

    AggregateResult {
        method,
        total: total(&rows),
        rows,
        common,
        left_only,
        right_only,
    }
}

/// Scores a single pair, reading a missing side as empty content.
#[must_use]
pub fn compare_pair(pair: &ComparisonPair) -> FileResult {
    let (left, right) = pair.sides();
    let similarity = compare(left, right);
    let left_lines = count_lines(left);
    let right_lines = count_lines(right);

    let lines = match pair.kind() {
        PairKind::RightOnly => right_lines,
        PairKind::Common | PairKind::LeftOnly => left_lines,
    };

    FileResult {
        path: pair.path().to_owned(),
        kind: Some(pair.kind()),
        distance: similarity.distance,
        length: similarity.length,
        ratio: similarity.ratio,
        lines,
        lines_delta: to_i64(right_lines).saturating_sub(to_i64(left_lines)),
    }
}

/// Length-weighted total: `1 - Σdistance / Σlength`.
#[must_use]
pub fn total(rows: &[FileResult]) -> FileResult {
    let distance = rows.iter().fold(0_u64, |acc, row| acc.saturating_add(row.distance));
    let length = rows.iter().fold(0_u64, |acc, row| acc.saturating_add(row.length));
    let lines = rows.iter().fold(0_u64, |acc, row| acc.saturating_add(row.lines));
    let lines_delta = rows
        .iter()
        .fold(0_i64, |acc, row| acc.saturating_add(row.lines_delta));

    FileResult {
        path: TOTAL_ROW.to_owned(),
        kind: None,
        distance,
        length,
        ratio: ratio(distance, length),
        lines,
        lines_delta,
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
