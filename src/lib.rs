//! # pumpkin-power
//!
//! Turns pumpkins into jack o'lanterns while they receive redstone power,
//! and back again when the power goes away.
//!
//! ## Design Principles
//!
//! 1. **Pure Rule**: The swap decision is a function of explicit state and
//!    the observed block. No globals, no host calls.
//!
//! 2. **Host Agnostic**: The game server is reached only through the
//!    `HostBlock` and `Listener` traits.
//!
//! 3. **Never Fails Outward**: File problems are logged and replaced by
//!    defaults; the host never sees an error.
//!
//! ## Modules
//!
//! - `core`: Block identity, power, config, data folder layout, errors
//! - `tracking`: Set of swapped locations and its flat-file store
//! - `rules`: The swap rule as pure functions
//! - `triggers`: Host notifications and the listener contract
//! - `host`: Host block trait and an in-memory host
//! - `plugin`: Lifecycle and the handlers a host registers
//!
//! ## Logging
//!
//! All output goes through `tracing` under the `Pumpkins` target. The
//! embedding host installs the subscriber.

pub mod core;
pub mod host;
pub mod plugin;
pub mod rules;
pub mod tracking;
pub mod triggers;

/// `tracing` target for everything this crate logs.
pub const LOG_TARGET: &str = "Pumpkins";

// Re-export commonly used types
pub use crate::core::{
    BlockLocation, BlockTypeId, ConfigStore, DataLayout, LocationKey, PluginConfig, PowerLevel,
    StoreError,
};

pub use crate::host::{HostBlock, MemoryBlock, MemoryWorld};

pub use crate::plugin::PumpkinPower;

pub use crate::rules::{on_power_change, on_remove, PowerOutcome, RuleState, SwapRule};

pub use crate::tracking::{ChangeSet, ChangeSetStore};

pub use crate::triggers::{BlockEvent, EventKind, Listener};
