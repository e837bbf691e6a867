//! Error types for file-backed state.
//!
//! Every variant is recoverable: lifecycle code logs it and substitutes a
//! default, so none of these ever reach the host.

use std::path::PathBuf;

/// Errors raised while reading or writing the plugin's files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The config file could not be read.
    #[error("failed to load {}: {source}", path.display())]
    ConfigRead {
        /// The config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The default config file could not be written.
    #[error("failed to save default {}: {source}", path.display())]
    ConfigWrite {
        /// The config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The changed-blocks file could not be read.
    #[error("failed to load changed blocks from {}: {source}", path.display())]
    DataRead {
        /// The data file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The changed-blocks file could not be written or created.
    #[error("failed to save changed blocks to {}: {source}", path.display())]
    DataWrite {
        /// The data file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The data folder could not be created.
    #[error("failed to create data folder {}: {source}", path.display())]
    CreateDir {
        /// The directory.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
