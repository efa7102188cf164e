// src/core/scanner.rs
mod file;

pub use file::{decode, read_text};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::matcher::PatternSet;
use crate::models::FileEntry;
use crate::utils::{is_hidden, relative_path};

/// Options for walking a tree that sit outside the pattern set.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOptions {
    /// Prune dot-files and dot-directories below the root.
    pub skip_hidden: bool,
}

/// Lists every regular file under `root` that `pattern_set` lets through.
///
/// # Errors
///
/// Returns an error if `root` is not a readable directory.
#[inline]
pub fn enumerate(root: &Path, pattern_set: &PatternSet) -> Result<Vec<FileEntry>> {
    enumerate_with(root, pattern_set, ScanOptions::default())
}

/// Lists the files under `root` and loads their contents.
///
/// Symlinks are followed; loops are detected by the walker and skipped.
/// Entries that cannot be read are logged and left out. The result is
/// sorted by relative path.
///
/// # Arguments
///
/// * `root` - The tree to walk
/// * `pattern_set` - Include/exclude globs applied to each relative file path
/// * `options` - Extra walk settings
///
/// # Errors
///
/// Returns an error if `root` is missing or is not a directory.
#[inline]
pub fn enumerate_with(
    root: &Path,
    pattern_set: &PatternSet,
    options: ScanOptions,
) -> Result<Vec<FileEntry>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Failed to access tree root: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Tree root is not a directory: {}", root.display());
    }

    let candidates = collect_files(root, pattern_set, options);
    debug!(root = %root.display(), files = candidates.len(), "collected candidate files");

    let mut entries: Vec<FileEntry> = candidates
        .into_par_iter()
        .filter_map(|(relative, path)| match read_text(&path) {
            Ok(content) => Some(FileEntry::new(relative, content)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                None
            }
        })
        .collect();

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Walks `root` and returns `(relative path, absolute path)` for each file
/// that passes the pattern set.
fn collect_files(
    root: &Path,
    pattern_set: &PatternSet,
    options: ScanOptions,
) -> Vec<(String, PathBuf)> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !(options.skip_hidden && e.depth() > 0 && is_hidden(e)))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    warn!(ancestor = %ancestor.display(), "skipping symlink loop");
                } else {
                    warn!(error = %err, "skipping unreadable entry");
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(relative) = relative_path(root, entry.path()) else {
            warn!(path = %entry.path().display(), "skipping file with a non UTF-8 path");
            continue;
        };
        if pattern_set.matches(&relative) {
            files.push((relative, entry.into_path()));
        }
    }

    files
}
