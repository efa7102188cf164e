// src/acquire.rs
mod git;

pub use git::{GIT_DIR_PATTERN, checkout_revisions, copy_tree};

use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The two trees a run compares. Scratch checkouts are deleted on drop.
#[derive(Debug)]
pub enum Trees {
    Local { left: PathBuf, right: PathBuf },
    Scratch { left: TempDir, right: TempDir },
}

impl Trees {
    #[inline]
    #[must_use]
    pub fn left(&self) -> &Path {
        match self {
            Self::Local { left, .. } => left,
            Self::Scratch { left, .. } => left.path(),
        }
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> &Path {
        match self {
            Self::Local { right, .. } => right,
            Self::Scratch { right, .. } => right.path(),
        }
    }
}

/// Uses two existing local directories as they are.
///
/// # Errors
///
/// Returns an error naming the path if either side is missing or is not a
/// directory.
#[inline]
pub fn local(left: &Path, right: &Path) -> Result<Trees> {
    ensure_dir(left)?;
    ensure_dir(right)?;
    Ok(Trees::Local {
        left: left.to_path_buf(),
        right: right.to_path_buf(),
    })
}

fn ensure_dir(path: &Path) -> Result<()> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Tree not found: {}", path.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", path.display());
    }
    Ok(())
}
