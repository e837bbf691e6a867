//! Host collaborator contract.
//!
//! The game server owns blocks and delivers notifications. Adapters for a
//! real server implement [`HostBlock`] over the server's block handle and
//! route its events to a [`Listener`](crate::triggers::Listener).
//! [`MemoryWorld`] is a complete in-memory host.

mod memory;

pub use memory::{MemoryBlock, MemoryWorld};

use crate::core::{BlockLocation, BlockTypeId, PowerLevel};

/// A block handle as exposed by the host.
pub trait HostBlock {
    /// Where the block is.
    fn location(&self) -> BlockLocation;

    /// Current block type.
    fn type_id(&self) -> BlockTypeId;

    /// Redstone power currently reaching the block.
    fn power(&self) -> PowerLevel;

    /// Change the block's type.
    fn set_type_id(&mut self, type_id: BlockTypeId);
}
