//! Path resolution module for mailquote
//!
//! Provides utilities for resolving file paths with support for:
//! - Absolute paths (returned as-is)
//! - Tilde (~) expansion to home directory
//! - Relative paths (resolved from current directory)
//! - XDG config directory lookup

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Expand tilde (~) in path to home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let Some(stripped) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    let home =
        std::env::var("HOME").map_err(|_| anyhow!("HOME environment variable not set"))?;
    if stripped.is_empty() {
        Ok(PathBuf::from(home))
    } else if let Some(rest) = stripped.strip_prefix('/') {
        Ok(PathBuf::from(home).join(rest))
    } else {
        // ~user is left alone
        Ok(PathBuf::from(path))
    }
}

/// Resolve a path to an absolute path
///
/// `~` is expanded first; relative paths are joined onto the current directory.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let current_dir = std::env::current_dir()
        .map_err(|e| anyhow!("Failed to get current directory: {}", e))?;
    Ok(current_dir.join(expanded))
}

/// Get the XDG config directory for mailquote
///
/// Returns: $XDG_CONFIG_HOME/mailquote or ~/.config/mailquote
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("mailquote")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("mailquote")
    } else {
        PathBuf::from(".config").join("mailquote")
    }
}
