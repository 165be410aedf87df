//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/foodie-hub/`, `~/.cache/foodie-hub/`
//! - macOS: `~/Library/Application Support/foodie-hub/`, `~/Library/Caches/foodie-hub/`
//! - Windows: `%APPDATA%\foodie-hub\`, `%LOCALAPPDATA%\foodie-hub\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "foodie-hub";
const LOCAL_SESSION_FILE: &str = ".foodie-hub.session.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Get path to global session file
pub fn global_session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}

/// Get path to local session file (in CWD)
pub fn local_session_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_SESSION_FILE))
}
