//! In-memory host.
//!
//! Holds blocks in a map and dispatches notifications to one listener at a
//! time, honoring its subscriptions. Every delivered notification is
//! journaled as a [`BlockEvent`].

use rustc_hash::FxHashMap;

use crate::core::{BlockLocation, BlockTypeId, PowerLevel};
use crate::triggers::{BlockEvent, EventKind, Listener};

use super::HostBlock;

/// A block stored by [`MemoryWorld`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryBlock {
    location: BlockLocation,
    type_id: BlockTypeId,
    power: PowerLevel,
}

impl MemoryBlock {
    /// Create a block.
    pub fn new(location: BlockLocation, type_id: BlockTypeId, power: PowerLevel) -> Self {
        Self {
            location,
            type_id,
            power,
        }
    }
}

impl HostBlock for MemoryBlock {
    fn location(&self) -> BlockLocation {
        self.location.clone()
    }

    fn type_id(&self) -> BlockTypeId {
        self.type_id
    }

    fn power(&self) -> PowerLevel {
        self.power
    }

    fn set_type_id(&mut self, type_id: BlockTypeId) {
        self.type_id = type_id;
    }
}

/// A tiny world of blocks keyed by location.
///
/// ## Usage
///
/// ```
/// use pumpkin_power::core::{BlockLocation, BlockTypeId, PowerLevel};
/// use pumpkin_power::host::MemoryWorld;
///
/// let mut world = MemoryWorld::new();
/// let at = BlockLocation::new("world", 0, 64, 0);
/// world.place(at.clone(), BlockTypeId::PUMPKIN);
///
/// assert_eq!(world.type_at(&at), Some(BlockTypeId::PUMPKIN));
/// assert_eq!(world.power_at(&at), Some(PowerLevel::OFF));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryWorld {
    blocks: FxHashMap<BlockLocation, MemoryBlock>,
    journal: Vec<BlockEvent>,
}

impl MemoryWorld {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an unpowered block, replacing whatever was there.
    pub fn place(&mut self, location: BlockLocation, type_id: BlockTypeId) {
        let block = MemoryBlock::new(location.clone(), type_id, PowerLevel::OFF);
        self.blocks.insert(location, block);
    }

    /// Block type at a location.
    #[must_use]
    pub fn type_at(&self, location: &BlockLocation) -> Option<BlockTypeId> {
        self.blocks.get(location).map(|b| b.type_id)
    }

    /// Power reaching a location.
    #[must_use]
    pub fn power_at(&self, location: &BlockLocation) -> Option<PowerLevel> {
        self.blocks.get(location).map(|b| b.power)
    }

    /// Notifications delivered so far, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[BlockEvent] {
        &self.journal
    }

    /// Change the power at a location and fire a power notification.
    ///
    /// Returns `false` if there is no block there.
    pub fn set_power(
        &mut self,
        location: &BlockLocation,
        power: PowerLevel,
        listener: &mut dyn Listener,
    ) -> bool {
        let Some(block) = self.blocks.get_mut(location) else {
            return false;
        };
        block.power = power;

        if listener.wants(EventKind::PowerChanged) {
            self.journal
                .push(BlockEvent::power_changed(location.clone(), block.type_id, power));
            listener.on_power_changed(block);
        }
        true
    }

    /// Fire a removal notification, then remove the block.
    ///
    /// Returns the removed block, or `None` if there was none.
    pub fn break_block(
        &mut self,
        location: &BlockLocation,
        listener: &mut dyn Listener,
    ) -> Option<MemoryBlock> {
        let block = self.blocks.remove(location)?;

        if listener.wants(EventKind::Removed) {
            self.journal
                .push(BlockEvent::removed(location.clone(), block.type_id));
            listener.on_removed(&block);
        }
        Some(block)
    }
}
