//! Changed-location tracking and its flat-file persistence.
//!
//! The `ChangeSet` records which locations this rule has swapped to the
//! lit form. `ChangeSetStore` reads it once at startup and writes it once
//! at shutdown; nothing is persisted in between, so an unclean shutdown
//! loses changes made since the last save.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::core::block::LocationKey;
use crate::core::error::StoreError;
use crate::LOG_TARGET;

/// Set of locations currently in the altered form.
///
/// ## Usage
///
/// ```
/// use pumpkin_power::core::BlockLocation;
/// use pumpkin_power::tracking::ChangeSet;
///
/// let mut changes = ChangeSet::new();
/// let key = BlockLocation::new("world", 0, 64, 0).key();
///
/// assert!(changes.insert(key.clone()));
/// assert!(!changes.insert(key.clone()));
/// assert!(changes.contains(&key));
/// assert_eq!(changes.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    locations: FxHashSet<LocationKey>,
}

impl ChangeSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Returns `false` if it was already present.
    pub fn insert(&mut self, location: LocationKey) -> bool {
        self.locations.insert(location)
    }

    /// Remove a location. Returns `false` if it was absent.
    pub fn remove(&mut self, location: &LocationKey) -> bool {
        self.locations.remove(location)
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, location: &LocationKey) -> bool {
        self.locations.contains(location)
    }

    /// Number of tracked locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True when nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationKey> {
        self.locations.iter()
    }
}

impl FromIterator<LocationKey> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = LocationKey>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().collect(),
        }
    }
}

/// Reads and writes `changed_blocks.txt`.
///
/// One location per line, no header, no escaping.
#[derive(Clone, Debug)]
pub struct ChangeSetStore {
    path: PathBuf,
}

impl ChangeSetStore {
    /// Create a store for the given data file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The data file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty data file if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataWrite`] if the file cannot be created.
    pub fn try_ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        fs::File::create(&self.path)
            .map(|_| ())
            .map_err(|source| self.write_error(source))
    }

    /// Create an empty data file if none exists, logging any failure.
    pub fn ensure_exists(&self) {
        if let Err(err) = self.try_ensure_exists() {
            warn!(target: LOG_TARGET, %err, "Could not create data file");
        }
    }

    /// Read the data file.
    ///
    /// Lines are trimmed; blank lines are skipped and duplicates collapse.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so one bad
    /// line never discards the others.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataRead`] if the file cannot be read.
    pub fn try_load(&self) -> Result<ChangeSet, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| self.read_error(source))?;

        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(LocationKey::new)
            .collect())
    }

    /// Read the data file, falling back to an empty set on failure.
    #[must_use]
    pub fn load(&self) -> ChangeSet {
        match self.try_load() {
            Ok(changes) => {
                debug!(target: LOG_TARGET, count = changes.len(), "Loaded changed blocks");
                changes
            }
            Err(err) => {
                warn!(target: LOG_TARGET, %err, "Starting with no changed blocks");
                ChangeSet::new()
            }
        }
    }

    /// Overwrite the data file with the current set.
    ///
    /// Not atomic: a crash mid-write can leave a truncated file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataWrite`] if the file cannot be written.
    pub fn try_save(&self, changes: &ChangeSet) -> Result<(), StoreError> {
        let file = fs::File::create(&self.path).map_err(|source| self.write_error(source))?;
        let mut writer = BufWriter::new(file);

        for location in changes.iter() {
            writeln!(writer, "{location}").map_err(|source| self.write_error(source))?;
        }
        writer.flush().map_err(|source| self.write_error(source))
    }

    /// Overwrite the data file, logging any failure.
    pub fn save(&self, changes: &ChangeSet) {
        match self.try_save(changes) {
            Ok(()) => debug!(target: LOG_TARGET, count = changes.len(), "Saved changed blocks"),
            Err(err) => warn!(target: LOG_TARGET, %err, "Changed blocks were not saved"),
        }
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::DataRead {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::DataWrite {
            path: self.path.clone(),
            source,
        }
    }
}
