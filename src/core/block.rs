//! Block identification types.
//!
//! The host owns the world; this crate only ever sees three facts about a
//! block: where it is, what type it currently has, and how much redstone
//! power reaches it.
//!
//! ## Usage
//!
//! ```
//! use pumpkin_power::core::{BlockLocation, BlockTypeId, PowerLevel};
//!
//! let location = BlockLocation::new("world", 10, 64, -3);
//! assert_eq!(location.key().as_str(), "world@10,64,-3");
//!
//! assert!(PowerLevel::from_raw(7).is_powered());
//! assert_eq!(PowerLevel::from_raw(99), PowerLevel::MAX);
//! assert_eq!(BlockTypeId::PUMPKIN.raw(), 86);
//! ```

use serde::{Deserialize, Serialize};

/// Numeric block type identifier as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockTypeId(pub u16);

impl BlockTypeId {
    /// Plain pumpkin.
    pub const PUMPKIN: Self = Self(86);

    /// Lit jack o'lantern.
    pub const JACK_O_LANTERN: Self = Self(91);

    /// Create a new block type ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for BlockTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlockType({})", self.0)
    }
}

/// Redstone power reaching a block, always within `0..=15`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PowerLevel(u8);

impl PowerLevel {
    /// No power.
    pub const OFF: Self = Self(0);

    /// Strongest signal a block can receive.
    pub const MAX: Self = Self(15);

    /// Convert a raw host value, clamping into `0..=15`.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        Self(raw.clamp(0, 15) as u8)
    }

    /// Get the level as a number.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Any power at all.
    #[must_use]
    pub const fn is_powered(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque key identifying one block position.
///
/// Only compared for equality and persisted one per line, so it must
/// not contain line breaks or surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    /// Wrap an already formatted key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&BlockLocation> for LocationKey {
    fn from(location: &BlockLocation) -> Self {
        location.key()
    }
}

/// A block position: world name plus integer coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockLocation {
    pub world: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockLocation {
    /// Create a new location.
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// The set key for this position (`world@x,y,z`).
    #[must_use]
    pub fn key(&self) -> LocationKey {
        LocationKey(self.to_string())
    }
}

impl std::fmt::Display for BlockLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{},{},{}", self.world, self.x, self.y, self.z)
    }
}
