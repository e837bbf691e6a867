//! The swap rule.
//!
//! Two pure entry points decide what happens for each notification:
//! - [`on_power_change`]: swap to the lit form when powered, back when not
//! - [`on_remove`]: report breaking a swapped block
//!
//! Both take the rule state explicitly and return what the caller should
//! do to the world; neither touches the host.
//!
//! ## Transitions
//!
//! | Observed form | Power | Tracked | Result |
//! |---|---|---|---|
//! | unaltered | > 0 | no  | set altered, track, log |
//! | altered   | 0   | yes | set unaltered, untrack, log |
//! | unaltered | 0   | yes | set unaltered, untrack, log |
//! | anything else | | | no-op |

use serde::{Deserialize, Serialize};

use crate::core::{BlockTypeId, LocationKey, PluginConfig, PowerLevel};
use crate::tracking::ChangeSet;

/// The pair of block forms being swapped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRule {
    /// Form when unpowered.
    pub unaltered: BlockTypeId,
    /// Form while powered.
    pub altered: BlockTypeId,
    /// Display name of the unaltered form, used in log lines.
    pub unaltered_name: String,
    /// Display name of the altered form, used in log lines.
    pub altered_name: String,
}

impl Default for SwapRule {
    fn default() -> Self {
        Self {
            unaltered: BlockTypeId::PUMPKIN,
            altered: BlockTypeId::JACK_O_LANTERN,
            unaltered_name: "Pumpkin".to_string(),
            altered_name: "Jack o' Lantern".to_string(),
        }
    }
}

impl SwapRule {
    /// Check if a form takes part in this rule.
    #[must_use]
    pub fn recognizes(&self, form: BlockTypeId) -> bool {
        form == self.unaltered || form == self.altered
    }
}

/// Mutable state the rule carries between notifications.
#[derive(Clone, Debug, Default)]
pub struct RuleState {
    /// Locations currently in the altered form.
    pub changes: ChangeSet,
    /// Whether transitions produce log lines.
    pub notifications_enabled: bool,
}

impl RuleState {
    /// Build state from loaded config and tracked locations.
    #[must_use]
    pub fn new(config: PluginConfig, changes: ChangeSet) -> Self {
        Self {
            changes,
            notifications_enabled: config.notifications_enabled,
        }
    }

    fn notify(&self, line: impl FnOnce() -> String) -> Option<String> {
        self.notifications_enabled.then(line)
    }
}

/// What the caller should do after a power notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PowerOutcome {
    /// Set the block to this form, if any.
    pub new_form: Option<BlockTypeId>,
    /// Emit this line, if any.
    pub log: Option<String>,
}

impl PowerOutcome {
    /// Nothing to do.
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// True when the block keeps its form.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.new_form.is_none()
    }
}

/// Apply the rule to a block whose power may have changed.
///
/// The membership check guards both directions, so repeated notifications
/// while powered (or unpowered) change nothing.
pub fn on_power_change(
    state: &mut RuleState,
    rule: &SwapRule,
    location: &LocationKey,
    form: BlockTypeId,
    power: PowerLevel,
) -> PowerOutcome {
    if !rule.recognizes(form) {
        return PowerOutcome::unchanged();
    }
    let tracked = state.changes.contains(location);

    if form == rule.unaltered && power.is_powered() && !tracked {
        state.changes.insert(location.clone());
        return PowerOutcome {
            new_form: Some(rule.altered),
            log: state.notify(|| {
                format!(
                    "{} powered, changing to {} at {}",
                    rule.unaltered_name, rule.altered_name, location
                )
            }),
        };
    }

    // A tracked unaltered block is a stale entry (the lit block was broken
    // and replaced); reverting clears it so the location can light again.
    if tracked && !power.is_powered() {
        state.changes.remove(location);
        return PowerOutcome {
            new_form: Some(rule.unaltered),
            log: state.notify(|| {
                format!(
                    "{} unpowered, reverting to {} at {}",
                    rule.altered_name, rule.unaltered_name, location
                )
            }),
        };
    }

    PowerOutcome::unchanged()
}

/// React to a block being broken.
///
/// Never blocks the removal and never untracks the location, so a broken
/// lit block leaves its entry behind.
#[must_use]
pub fn on_remove(state: &RuleState, location: &LocationKey) -> Option<String> {
    if !state.changes.contains(location) {
        return None;
    }
    state.notify(|| format!("Block at {location} is being broken (previously changed)."))
}
