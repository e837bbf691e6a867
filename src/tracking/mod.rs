//! Tracking of swapped locations.
//!
//! ## Key Types
//!
//! - `ChangeSet`: In-memory set of altered locations
//! - `ChangeSetStore`: Flat-file load/save at the lifecycle boundaries

pub mod change_set;

pub use change_set::{ChangeSet, ChangeSetStore};
