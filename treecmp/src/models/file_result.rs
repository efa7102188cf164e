// src/models/file_result.rs
use serde::Serialize;

use crate::models::PairKind;

/// Comparison outcome for a single path, or for the synthetic total row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub path: String,
    pub kind: Option<PairKind>,
    pub distance: u64,
    /// `max(len(left), len(right))` in characters.
    pub length: u64,
    pub ratio: f64,
    pub lines: u64,
    pub lines_delta: i64,
}

impl FileResult {
    #[inline]
    #[must_use]
    pub fn similarity_percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    #[inline]
    #[must_use]
    pub fn difference_percentage(&self) -> f64 {
        100.0 - self.similarity_percentage()
    }
}
