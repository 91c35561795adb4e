//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for tclip.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tclip` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/tclip` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("tclip")),
        _ => Ok(home_dir()?.join(".config").join("tclip")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
