// src/models/aggregate_result.rs
use serde::Serialize;

use crate::models::{FileResult, Method};

/// Per-file rows sorted by path, plus the weighted total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub method: Method,
    pub rows: Vec<FileResult>,
    pub total: FileResult,
    pub common: u64,
    pub left_only: u64,
    pub right_only: u64,
}

impl AggregateResult {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn row(&self, path: &str) -> Option<&FileResult> {
        self.rows.iter().find(|row| row.path == path)
    }
}
