//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file in the platform config
//! directory, e.g. `~/.config/qxiangqi/settings.json`. Falls back to a
//! local `settings.json` when no config directory can be resolved.
//!
//! Load failures are returned to the caller, which logs them and falls back
//! to [`Settings::default`] once logging is set up.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use qxiangqi_engine::constants::INITIAL_FEN;
use qxiangqi_engine::Color;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::CoreResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for the command-line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Position used when no `--fen` is given
    pub start_fen: String,
    /// Side to move for `start_fen`
    pub first_player: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            start_fen: INITIAL_FEN.to_string(),
            first_player: Color::Red,
        }
    }
}

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "qxiangqi", "qxiangqi") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
///
/// A missing file yields defaults; unreadable or malformed files are errors.
pub fn try_load_settings(path: &Path) -> CoreResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings(path: &Path, settings: &Settings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
