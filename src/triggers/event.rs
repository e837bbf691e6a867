//! Host notification types.
//!
//! The host fires two kinds of block notification that this rule cares
//! about. `BlockEvent` captures what the handler observed when one arrived,
//! which is what adapters log or forward when they need a record of it.

use serde::{Deserialize, Serialize};

use crate::core::{BlockLocation, BlockTypeId, PowerLevel};

/// Notification kinds a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A block's physics were updated, possibly with a new power level.
    PowerChanged,
    /// A block is being broken.
    Removed,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::PowerChanged => f.write_str("power-changed"),
            EventKind::Removed => f.write_str("removed"),
        }
    }
}

/// What a handler saw when a notification arrived.
///
/// `power` is only meaningful for [`EventKind::PowerChanged`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEvent {
    /// The kind of notification.
    pub kind: EventKind,

    /// Where it happened.
    pub location: BlockLocation,

    /// Block type at the time of the notification.
    pub form: BlockTypeId,

    /// Power reaching the block.
    pub power: PowerLevel,
}

impl BlockEvent {
    /// Create a power-changed event.
    pub fn power_changed(location: BlockLocation, form: BlockTypeId, power: PowerLevel) -> Self {
        Self {
            kind: EventKind::PowerChanged,
            location,
            form,
            power,
        }
    }

    /// Create a removed event.
    pub fn removed(location: BlockLocation, form: BlockTypeId) -> Self {
        Self {
            kind: EventKind::Removed,
            location,
            form,
            power: PowerLevel::OFF,
        }
    }

    /// Check the notification kind.
    #[must_use]
    pub fn is(&self, kind: EventKind) -> bool {
        self.kind == kind
    }
}
