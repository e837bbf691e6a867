//! Swap rule integration tests.
//!
//! These tests drive the pure rule functions through whole sequences of
//! notifications and check the tracked set stays consistent with the
//! block's form.

use proptest::prelude::*;

use pumpkin_power::core::{BlockLocation, BlockTypeId, LocationKey, PluginConfig, PowerLevel};
use pumpkin_power::rules::{on_power_change, on_remove, RuleState, SwapRule};
use pumpkin_power::tracking::ChangeSet;

fn enabled_state() -> RuleState {
    RuleState::new(PluginConfig::default(), ChangeSet::new())
}

fn spot() -> LocationKey {
    BlockLocation::new("world", -12, 70, 300).key()
}

/// Powering the same pumpkin twice swaps and tracks it once.
#[test]
fn test_power_on_is_idempotent() {
    let rule = SwapRule::default();
    let mut state = enabled_state();
    let mut form = rule.unaltered;

    let first = on_power_change(&mut state, &rule, &spot(), form, PowerLevel::from_raw(8));
    form = first.new_form.unwrap_or(form);
    assert_eq!(form, rule.altered);
    assert!(first.log.is_some());

    let second = on_power_change(&mut state, &rule, &spot(), form, PowerLevel::from_raw(12));
    assert!(second.is_unchanged());
    assert!(second.log.is_none());
    assert_eq!(state.changes.len(), 1);
}

/// Power on then off restores the original form and empties the set.
#[test]
fn test_power_on_off_symmetry() {
    let rule = SwapRule::default();
    let mut state = enabled_state();

    let on = on_power_change(&mut state, &rule, &spot(), rule.unaltered, PowerLevel::MAX);
    let lit = on.new_form.unwrap();

    let off = on_power_change(&mut state, &rule, &spot(), lit, PowerLevel::OFF);
    assert_eq!(off.new_form, Some(rule.unaltered));
    assert!(state.changes.is_empty());
}

/// With notifications off, transitions still happen but nothing is logged.
#[test]
fn test_disabled_notifications_are_silent() {
    let rule = SwapRule::default();
    let mut state = RuleState::new(
        PluginConfig {
            notifications_enabled: false,
        },
        ChangeSet::new(),
    );

    let on = on_power_change(&mut state, &rule, &spot(), rule.unaltered, PowerLevel::MAX);
    assert_eq!(on.new_form, Some(rule.altered));
    assert!(on.log.is_none());
    assert!(on_remove(&state, &spot()).is_none());

    let off = on_power_change(&mut state, &rule, &spot(), rule.altered, PowerLevel::OFF);
    assert_eq!(off.new_form, Some(rule.unaltered));
    assert!(off.log.is_none());
}

/// Blocks of any other type are never touched.
#[test]
fn test_unknown_form_untouched() {
    let rule = SwapRule::default();
    let mut state = enabled_state();

    for raw in [0, 1, 85, 87, 90, 92, 124] {
        for power in [PowerLevel::OFF, PowerLevel::MAX] {
            let outcome =
                on_power_change(&mut state, &rule, &spot(), BlockTypeId::new(raw), power);
            assert!(outcome.is_unchanged());
            assert!(outcome.log.is_none());
        }
    }
    assert!(state.changes.is_empty());
}

/// Locations are tracked independently.
#[test]
fn test_locations_are_independent() {
    let rule = SwapRule::default();
    let mut state = enabled_state();
    let a = BlockLocation::new("world", 0, 64, 0).key();
    let b = BlockLocation::new("world", 0, 64, 1).key();

    on_power_change(&mut state, &rule, &a, rule.unaltered, PowerLevel::MAX);
    on_power_change(&mut state, &rule, &b, rule.unaltered, PowerLevel::MAX);
    assert_eq!(state.changes.len(), 2);

    on_power_change(&mut state, &rule, &a, rule.altered, PowerLevel::OFF);
    assert!(!state.changes.contains(&a));
    assert!(state.changes.contains(&b));
}

/// Breaking a lit block leaves its entry tracked.
#[test]
fn test_remove_keeps_stale_entry() {
    let rule = SwapRule::default();
    let mut state = enabled_state();

    on_power_change(&mut state, &rule, &spot(), rule.unaltered, PowerLevel::MAX);
    let line = on_remove(&state, &spot()).unwrap();
    assert!(line.contains(spot().as_str()));
    assert!(state.changes.contains(&spot()));
}

proptest! {
    /// Starting from a plain pumpkin, the location is tracked exactly when
    /// the block shows the lit form, whatever the power sequence.
    #[test]
    fn prop_tracked_iff_altered(powers in prop::collection::vec(0i32..=15, 1..64)) {
        let rule = SwapRule::default();
        let mut state = enabled_state();
        let mut form = rule.unaltered;

        for raw in powers {
            let power = PowerLevel::from_raw(raw);
            let outcome = on_power_change(&mut state, &rule, &spot(), form, power);
            if let Some(new_form) = outcome.new_form {
                form = new_form;
            }

            prop_assert_eq!(state.changes.contains(&spot()), form == rule.altered);
            prop_assert_eq!(form == rule.altered, power.is_powered());
            prop_assert!(state.changes.len() <= 1);
        }
    }
}
