//! Session flag persistence
//!
//! Remembers whether the user signed in or continued as a guest, so the
//! next start can skip the sign-in step.
//!
//! # Precedence
//!
//! 1. `$CWD/.foodie-hub.session.toml` - Local session (highest priority)
//! 2. `~/.config/foodie-hub/session.toml` - Global session (fallback)
//!
//! On save: Use local file if it exists, otherwise use global.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// The persisted flags
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionFlags {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub guest: bool,
}

/// Who is using the app right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    SignedOut,
    Authenticated,
    Guest,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionFlags,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionFlags::default(),
        }
    }
}

impl Session {
    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        let local = paths::local_session_path().ok();
        let global = paths::global_session_path().ok();
        Self::load_from(local.as_deref(), global.as_deref())
    }

    /// Load from the first of `local`, `global` that exists and parses.
    ///
    /// A malformed file is skipped with a warning.
    pub fn load_from(local: Option<&Path>, global: Option<&Path>) -> Self {
        for (scope, path) in [("local", local), ("global", global)] {
            let Some(path) = path.filter(|p| p.exists()) else {
                continue;
            };
            match Self::load_from_path(path) {
                Ok(session) => {
                    log::info!("Loaded {} session from {:?}", scope, path);
                    return session;
                }
                Err(e) => log::warn!("Ignoring {} session: {:#}", scope, e),
            }
        }

        log::info!("No existing session found, starting signed out");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        let local = paths::local_session_path()?;
        let global = paths::global_session_path()?;
        self.save_to_preferred(&local, &global)?;
        Ok(())
    }

    /// Save to `local` if that file already exists, otherwise to `global`.
    /// Returns the path written.
    pub fn save_to_preferred(&mut self, local: &Path, global: &Path) -> Result<PathBuf> {
        let path = if local.exists() { local } else { global };
        self.save_to_path(path)?;
        Ok(path.to_path_buf())
    }

    /// Save session to specific path, refreshing the timestamp
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Mark the session as signed in
    pub fn login(&mut self) {
        self.session.authenticated = true;
        self.session.guest = false;
    }

    /// Mark the session as a guest session
    pub fn continue_as_guest(&mut self) {
        self.session.guest = true;
    }

    /// Forget both flags
    pub fn logout(&mut self) {
        self.session = SessionFlags::default();
    }

    /// Current status. A signed-in flag wins over a stale guest flag.
    pub fn status(&self) -> SessionStatus {
        if self.session.authenticated {
            SessionStatus::Authenticated
        } else if self.session.guest {
            SessionStatus::Guest
        } else {
            SessionStatus::SignedOut
        }
    }

    /// Whether the main screens (navbar, menu, cart) should be reachable
    pub fn has_access(&self) -> bool {
        self.status() != SessionStatus::SignedOut
    }
}
