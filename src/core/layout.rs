//! Data folder layout.
//!
//! Files live in a `PumpkinPower` directory that sits beside the plugin's
//! own data folder, i.e. directly under the host's plugins directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::config::CONFIG_FILE_NAME;
use super::error::StoreError;

/// Name of the shared data directory.
pub const DATA_DIR_NAME: &str = "PumpkinPower";

/// File name of the persisted change set.
pub const DATA_FILE_NAME: &str = "changed_blocks.txt";

/// Where the plugin keeps its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    /// Use `root` directly as the data folder.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the folder from the host-assigned plugin data folder.
    ///
    /// `plugins/SomePlugin` resolves to `plugins/PumpkinPower`. A path with
    /// no parent is used as the parent itself.
    pub fn beside(plugin_data_folder: &Path) -> Self {
        let parent = plugin_data_folder.parent().unwrap_or(plugin_data_folder);
        Self::new(parent.join(DATA_DIR_NAME))
    }

    /// The data folder.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `config.yml`.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path of `changed_blocks.txt`.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE_NAME)
    }

    /// Create the data folder and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateDir`] if the directory cannot be created.
    pub fn create(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::CreateDir {
            path: self.root.clone(),
            source,
        })
    }
}
