//! Plugin lifecycle and host-facing handlers.
//!
//! `PumpkinPower` owns the rule state for one server run:
//! - `enable` prepares the data folder, reads config and tracked locations
//! - the [`Listener`] impl bridges host blocks to the pure rule functions
//! - `disable` writes tracked locations back out
//!
//! ## Usage
//!
//! ```
//! use pumpkin_power::core::{BlockLocation, BlockTypeId, DataLayout, PowerLevel};
//! use pumpkin_power::host::MemoryWorld;
//! use pumpkin_power::PumpkinPower;
//!
//! let dir = std::env::temp_dir().join(format!("pumpkin-doc-{}", std::process::id()));
//! let mut plugin = PumpkinPower::enable(DataLayout::new(&dir));
//!
//! let mut world = MemoryWorld::new();
//! let at = BlockLocation::new("world", 0, 64, 0);
//! world.place(at.clone(), BlockTypeId::PUMPKIN);
//!
//! world.set_power(&at, PowerLevel::MAX, &mut plugin);
//! assert_eq!(world.type_at(&at), Some(BlockTypeId::JACK_O_LANTERN));
//!
//! plugin.disable();
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

use tracing::{info, warn};

use crate::core::{ConfigStore, DataLayout, PluginConfig};
use crate::host::HostBlock;
use crate::rules::{on_power_change, on_remove, PowerOutcome, RuleState, SwapRule};
use crate::tracking::{ChangeSet, ChangeSetStore};
use crate::triggers::{BlockEvent, EventKind, Listener};
use crate::LOG_TARGET;

const SUBSCRIPTIONS: &[EventKind] = &[EventKind::PowerChanged, EventKind::Removed];

/// The running plugin.
#[derive(Debug)]
pub struct PumpkinPower {
    rule: SwapRule,
    state: RuleState,
    store: ChangeSetStore,
}

impl PumpkinPower {
    /// Start the plugin with the default pumpkin rule.
    ///
    /// Never fails: every I/O problem is logged and replaced by a default.
    pub fn enable(layout: DataLayout) -> Self {
        Self::enable_with_rule(layout, SwapRule::default())
    }

    /// Start the plugin with a custom swap rule.
    pub fn enable_with_rule(layout: DataLayout, rule: SwapRule) -> Self {
        if let Err(err) = layout.create() {
            warn!(target: LOG_TARGET, %err, "Data folder unavailable");
        }

        let config_store = ConfigStore::new(layout.config_file());
        config_store.save_default();
        let config = config_store.load();

        let store = ChangeSetStore::new(layout.data_file());
        store.ensure_exists();
        let changes = store.load();

        info!(target: LOG_TARGET, "PumpkinPowerPlugin enabled!");
        Self::from_parts(rule, config, changes, store)
    }

    /// Assemble a plugin from already loaded parts.
    pub fn from_parts(
        rule: SwapRule,
        config: PluginConfig,
        changes: ChangeSet,
        store: ChangeSetStore,
    ) -> Self {
        Self {
            rule,
            state: RuleState::new(config, changes),
            store,
        }
    }

    /// Save tracked locations and shut down.
    pub fn disable(self) {
        self.store.save(&self.state.changes);
        info!(target: LOG_TARGET, "PumpkinPowerPlugin disabled.");
    }

    /// The active rule.
    #[must_use]
    pub fn rule(&self) -> &SwapRule {
        &self.rule
    }

    /// Locations currently swapped.
    #[must_use]
    pub fn changes(&self) -> &ChangeSet {
        &self.state.changes
    }

    /// Whether transitions are logged.
    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        self.state.notifications_enabled
    }

    /// Decide on an observed notification without touching the host.
    ///
    /// Removal events never change the block, so only their log line is set.
    pub fn handle(&mut self, event: &BlockEvent) -> PowerOutcome {
        let key = event.location.key();
        match event.kind {
            EventKind::PowerChanged => {
                on_power_change(&mut self.state, &self.rule, &key, event.form, event.power)
            }
            EventKind::Removed => PowerOutcome {
                new_form: None,
                log: on_remove(&self.state, &key),
            },
        }
    }
}

impl Listener for PumpkinPower {
    fn subscriptions(&self) -> &[EventKind] {
        SUBSCRIPTIONS
    }

    fn on_power_changed(&mut self, block: &mut dyn HostBlock) {
        let event = BlockEvent::power_changed(block.location(), block.type_id(), block.power());
        let outcome = self.handle(&event);

        if let Some(form) = outcome.new_form {
            block.set_type_id(form);
        }
        if let Some(line) = outcome.log {
            info!(target: LOG_TARGET, "{line}");
        }
    }

    fn on_removed(&mut self, block: &dyn HostBlock) {
        let event = BlockEvent::removed(block.location(), block.type_id());
        if let Some(line) = self.handle(&event).log {
            info!(target: LOG_TARGET, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::{BlockLocation, BlockTypeId, PowerLevel};

    fn plugin(enabled: bool) -> PumpkinPower {
        PumpkinPower::from_parts(
            SwapRule::default(),
            PluginConfig {
                notifications_enabled: enabled,
            },
            ChangeSet::new(),
            ChangeSetStore::new("unused.txt"),
        )
    }

    #[test]
    fn test_handle_power_then_remove() {
        let mut plugin = plugin(true);
        let at = BlockLocation::new("world", 3, 70, 3);

        let on = plugin.handle(&BlockEvent::power_changed(
            at.clone(),
            BlockTypeId::PUMPKIN,
            PowerLevel::from_raw(4),
        ));
        assert_eq!(on.new_form, Some(BlockTypeId::JACK_O_LANTERN));

        let removed = plugin.handle(&BlockEvent::removed(at.clone(), BlockTypeId::JACK_O_LANTERN));
        assert!(removed.is_unchanged());
        assert!(removed.log.is_some());
        assert!(plugin.changes().contains(&at.key()));
    }

    #[test]
    fn test_subscribes_to_both_kinds() {
        let plugin = plugin(false);
        assert!(plugin.wants(EventKind::PowerChanged));
        assert!(plugin.wants(EventKind::Removed));
        assert!(!plugin.notifications_enabled());
    }
}
