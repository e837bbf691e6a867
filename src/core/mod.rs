//! Core types: block identity, power, configuration, file layout, errors.
//!
//! Nothing here depends on the rule itself; `rules` and `tracking` build on
//! these types.

pub mod block;
pub mod config;
pub mod error;
pub mod layout;

pub use block::{BlockLocation, BlockTypeId, LocationKey, PowerLevel};
pub use config::{ConfigStore, PluginConfig, CONFIG_FILE_NAME, NOTIFICATIONS_KEY};
pub use error::StoreError;
pub use layout::{DataLayout, DATA_DIR_NAME, DATA_FILE_NAME};
