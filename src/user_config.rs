//! User-level global configuration loaded from `~/.tagtriage/config.toml`.
//!
//! This file is optional; if it does not exist all fields fall back to their
//! `Default` values. The schema is intentionally minimal — the `[tagger]`
//! section holds the few knobs that make sense machine-wide, like where the
//! tag configuration lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::utils;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Tagger-scoped settings (`[tagger]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TaggerSettings {
    /// Path to the tag configuration JSON. Relative paths resolve against
    /// the working directory. A `--config` flag takes precedence.
    #[serde(default)]
    pub config_path: Option<PathBuf>,
}

/// Top-level user configuration, deserialized from
/// `~/.tagtriage/config.toml`.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    /// Tagger-level settings (`[tagger]` section).
    #[serde(default)]
    pub tagger: TaggerSettings,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the canonical path for the user config file
/// (`~/.tagtriage/config.toml`).
///
/// Co-located with the rest of the user-scoped tagtriage data (`logs/`) so
/// everything user-level lives under one directory.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    utils::app_home().map(|home| home.join("config.toml"))
}

/// Load the user configuration from `~/.tagtriage/config.toml`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist so callers
/// never need to handle the "absent file" case specially.
///
/// # Errors
///
/// Returns [`UserConfigError`] if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    let Some(path) = user_config_path() else {
        warn!("Could not determine user config directory; using defaults");
        return Ok(UserConfig::default());
    };

    if !path.exists() {
        debug!(
            "User config not found at {}; using defaults",
            path.display()
        );
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
