//! Plugin configuration.
//!
//! `config.yml` is read line by line, not as a YAML document. The only
//! recognized entry is:
//!
//! ```text
//! notifications-enabled: true
//! ```
//!
//! Unknown lines are ignored. A missing, unreadable, or empty file leaves
//! notifications on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::StoreError;
use crate::LOG_TARGET;

/// File name of the config inside the data folder.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Key of the notification toggle.
pub const NOTIFICATIONS_KEY: &str = "notifications-enabled";

/// Contents written when no config exists.
pub const DEFAULT_CONFIG: &str = "notifications-enabled: true\n";

/// Settings read once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Emit a log line for every swap and for breaking a swapped block.
    pub notifications_enabled: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
        }
    }
}

impl PluginConfig {
    /// Parse config text.
    ///
    /// Any line starting with `notifications-enabled` is split on `:` and
    /// the second token decides the flag: `true` in any case enables it,
    /// every other token disables it. The last such line wins. Lines
    /// without a `:` are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();

        for line in text.lines() {
            if !line.starts_with(NOTIFICATIONS_KEY) {
                continue;
            }
            match line.split(':').nth(1) {
                Some(value) => {
                    config.notifications_enabled = value.trim().eq_ignore_ascii_case("true");
                }
                None => {
                    debug!(target: LOG_TARGET, line, "Skipping config line without a value");
                }
            }
        }

        config
    }
}

/// Reads and seeds `config.yml`.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given config file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The config file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the config file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConfigRead`] if the file cannot be read.
    pub fn try_load(&self) -> Result<PluginConfig, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(PluginConfig::parse(&text))
    }

    /// Load the config, falling back to defaults on any read failure.
    #[must_use]
    pub fn load(&self) -> PluginConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(err) => {
                warn!(target: LOG_TARGET, %err, "Using default config");
                PluginConfig::default()
            }
        }
    }

    /// Write the default file unless one already exists.
    ///
    /// Returns whether a file was written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConfigWrite`] if the file cannot be written.
    pub fn try_save_default(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        fs::write(&self.path, DEFAULT_CONFIG).map_err(|source| StoreError::ConfigWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }

    /// Write the default file unless one already exists; failures are
    /// logged and otherwise ignored.
    pub fn save_default(&self) {
        match self.try_save_default() {
            Ok(true) => {
                debug!(target: LOG_TARGET, path = %self.path.display(), "Wrote default config");
            }
            Ok(false) => {}
            Err(err) => warn!(target: LOG_TARGET, %err, "Could not write default config"),
        }
    }
}
