//! # Logger Configuration
//!
//! Startup settings for a [`Logger`](crate::Logger), stored as TOML so they
//! can be edited by hand:
//!
//! ```toml
//! levels = "WARNING | ERROR | CRITICAL"
//! display = "SHOW_DATE | SHOW_FILE_INFO"
//! log_file = "game.log"
//! color = "auto"
//! assert_action = "abort"
//! ```
//!
//! A `profile` entry, when present, replaces both `levels` and `display`.
//!
//! ## Storage Location
//!
//! [`LoggerConfig::load`] looks in the platform config directory:
//!
//! - **Windows**: `%APPDATA%\omlogger\config.toml`
//! - **macOS**: `~/Library/Application Support/omlogger/config.toml`
//! - **Linux**: `~/.config/omlogger/config.toml`

use crate::assertion::AssertAction;
use crate::console::ColorMode;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::display::DisplaySettings;
use crate::error::{LogError, LogResult};
use crate::level::LevelFilter;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Levels let through
    pub levels: LevelFilter,

    /// Metadata fields rendered before each message
    pub display: DisplaySettings,

    /// Preset overriding `levels` and `display`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// File opened in append mode at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    pub color: ColorMode,

    pub assert_action: AssertAction,
}

impl LoggerConfig {
    /// Level filter after applying `profile`
    pub fn effective_levels(&self) -> LevelFilter {
        self.profile.map_or(self.levels, Profile::levels)
    }

    /// Display settings after applying `profile`
    pub fn effective_display(&self) -> DisplaySettings {
        self.profile.map_or(self.display, Profile::display)
    }

    /// Load from the platform config directory.
    ///
    /// Never fails: a missing file yields the defaults, an unreadable or
    /// corrupt one is reported and also yields the defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(path),
            Err(e) => {
                warn!("{e}, using default logger settings");
                Self::default()
            }
        }
    }

    /// Load from `path` with the same fallbacks as [`LoggerConfig::load`]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using default logger settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LogError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save_to(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        };
        write().map_err(|source| LogError::WriteConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the platform config directory
    pub fn save(&self) -> LogResult<()> {
        self.save_to(Self::config_path()?)
    }

    pub fn config_path() -> LogResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(LogError::NoConfigDir)?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
