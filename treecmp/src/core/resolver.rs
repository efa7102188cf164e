// src/core/resolver.rs
use std::collections::BTreeMap;

use crate::models::{ComparisonPair, FileEntry};

/// Matches files from the two trees by exact relative path.
///
/// There is no rename detection: a moved file shows up once as
/// [`ComparisonPair::LeftOnly`] and once as [`ComparisonPair::RightOnly`].
/// Pairs come out in path order.
#[must_use]
pub fn resolve(left: Vec<FileEntry>, right: Vec<FileEntry>) -> Vec<ComparisonPair> {
    let mut right: BTreeMap<String, String> = right
        .into_iter()
        .map(|entry| (entry.path, entry.content))
        .collect();

    let mut pairs: Vec<ComparisonPair> = left
        .into_iter()
        .map(|entry| match right.remove(&entry.path) {
            Some(right_content) => ComparisonPair::Common {
                path: entry.path,
                left: entry.content,
                right: right_content,
            },
            None => ComparisonPair::LeftOnly {
                path: entry.path,
                content: entry.content,
            },
        })
        .collect();

    pairs.extend(
        right
            .into_iter()
            .map(|(path, content)| ComparisonPair::RightOnly { path, content }),
    );
    pairs.sort_by(|a, b| a.path().cmp(b.path()));
    pairs
}
