// src/acquire/git.rs
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::acquire::Trees;

/// Keeps git's own metadata out of a comparison of two checkouts.
pub const GIT_DIR_PATTERN: &str = "*/.git/*";

/// Checks out two revisions of `repo` into fresh scratch directories.
///
/// The first revision is fetched into an empty repository; the second
/// checkout starts from a copy of the first so shared objects are fetched
/// only once.
///
/// # Errors
///
/// This function may return an error if:
/// * A scratch directory cannot be created
/// * `git` cannot be started or any git command fails
/// * The first checkout cannot be copied
pub fn checkout_revisions(repo: &str, left_rev: &str, right_rev: &str) -> Result<Trees> {
    let left = TempDir::new().context("Failed to create scratch directory")?;
    let right = TempDir::new().context("Failed to create scratch directory")?;

    info!(repo, rev = left_rev, dir = %left.path().display(), "checking out left revision");
    git(left.path(), &["init", "--quiet"])?;
    git(left.path(), &["remote", "add", "--end-of-options", "origin", repo])?;
    checkout(left.path(), left_rev)?;

    copy_tree(left.path(), right.path())?;
    info!(repo, rev = right_rev, dir = %right.path().display(), "checking out right revision");
    checkout(right.path(), right_rev)?;

    Ok(Trees::Scratch { left, right })
}

fn checkout(dir: &Path, rev: &str) -> Result<()> {
    git(dir, &["fetch", "--quiet", "--end-of-options", "origin", rev])?;
    git(dir, &["checkout", "--quiet", "--force", "FETCH_HEAD"])
}

fn git(dir: &Path, args: &[&str]) -> Result<()> {
    debug!(dir = %dir.display(), args = ?args, "running git");
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .context("Failed to run git; is it installed?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }
    Ok(())
}

/// Recursively copies `from` into the existing directory `to`, keeping
/// symlinks as symlinks.
///
/// # Errors
///
/// Returns an error if any entry cannot be read, created or copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", from.display()))?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .with_context(|| format!("Entry outside {}", from.display()))?;
        let target = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source)
        .with_context(|| format!("Failed to read link {}", source.display()))?;
    std::os::unix::fs::symlink(&link, target)
        .with_context(|| format!("Failed to create link {}", target.display()))
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target)
        .map(|_| ())
        .with_context(|| format!("Failed to copy {}", source.display()))
}
