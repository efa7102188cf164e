// src/config/loader.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Config;

pub const CONFIG_FILE: &str = "treecmp.toml";

/// Parses a config file at an explicit path.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Looks for `treecmp.toml` starting from the given directory and walking up
/// through its parents until one is found.
///
/// # Returns
///
/// * `Ok(Some(Config))` for the nearest config file
/// * `Ok(None)` if no directory up to the filesystem root has one
///
/// # Errors
///
/// This function may return an error if a config file exists but cannot be
/// read or parsed.
#[inline]
pub fn load_config(dir: &Path) -> Result<Option<Config>> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE);
        if config_file.is_file() {
            debug!(path = %config_file.display(), "using config file");
            return read_config(&config_file).map(Some);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(None)
}
