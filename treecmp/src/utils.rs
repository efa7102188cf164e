// src/utils.rs
use std::path::{Component, Path};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Turns `path` into a `/`-separated path relative to `root`, without a
/// leading `./`. `None` if `path` is outside `root` or is not valid UTF-8.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let stripped = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in stripped.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Counts lines of code: lines with at least one non-whitespace character.
#[must_use]
pub fn count_lines(content: &str) -> u64 {
    let lines = content.lines().filter(|line| !line.trim().is_empty()).count();
    u64::try_from(lines).unwrap_or(u64::MAX)
}
