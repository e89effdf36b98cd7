//! User settings for the command surfaces.
//!
//! Settings live in a small JSON file. A missing file means defaults; a file
//! that exists must parse and validate completely.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keys::{Modifier, Shortcut};

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "NOOK_SETTINGS";

const SETTINGS_DIR: &str = "nook";
const SETTINGS_FILE: &str = "settings.json";

/// Command surface settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Chord that toggles the command palette (e.g., "Mod+K")
    pub palette_shortcut: Shortcut,
    /// Modifier that turns a quick search submit into an ask
    pub ask_modifier: Modifier,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette_shortcut: Shortcut::PALETTE,
            ask_modifier: Modifier::Shift,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON payload
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Load settings from a file, falling back to defaults when it is absent
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(payload) => {
                let settings = Self::from_json(&payload)?;
                tracing::debug!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Resolve the settings file: explicit path, then `$NOOK_SETTINGS`, then the
/// platform config directory.
pub fn resolve_settings_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| {
            std::env::var_os(SETTINGS_PATH_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_settings_path)
}

/// `<config dir>/nook/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
