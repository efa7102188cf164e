// src/models/file_entry.rs

/// A file found while walking one side of the comparison.
///
/// `path` is relative to the tree root, uses `/` separators and never starts
/// with `./`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl FileEntry {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
