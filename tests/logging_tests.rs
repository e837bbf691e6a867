//! Notification logging through a real `tracing` subscriber.
//!
//! These tests capture formatted output from the host-facing handlers to
//! check that the config flag controls what reaches the log.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use pumpkin_power::core::{BlockLocation, BlockTypeId, DataLayout, PowerLevel};
use pumpkin_power::host::MemoryWorld;
use pumpkin_power::{PumpkinPower, LOG_TARGET};

/// Shared buffer the subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Run `f` with an info-level subscriber installed and return its output.
fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

/// Power on, power off and break one spot with the given config text.
fn cycle_with_config(config: &str) -> String {
    let temp_dir = TempDir::new().unwrap();
    let layout = DataLayout::new(temp_dir.path());
    fs::write(layout.config_file(), config).unwrap();
    let at = BlockLocation::new("world", 3, 65, 3);

    capture_logs(|| {
        let mut plugin = PumpkinPower::enable(layout);
        let mut world = MemoryWorld::new();
        world.place(at.clone(), BlockTypeId::PUMPKIN);

        world.set_power(&at, PowerLevel::MAX, &mut plugin);
        world.set_power(&at, PowerLevel::OFF, &mut plugin);
        world.set_power(&at, PowerLevel::MAX, &mut plugin);
        world.break_block(&at, &mut plugin);
        plugin.disable();
    })
}

/// With notifications on, every transition and the break are logged.
#[test]
fn test_notifications_reach_subscriber() {
    let output = cycle_with_config("notifications-enabled: true\n");

    assert!(output.contains(LOG_TARGET));
    assert!(output.contains("Pumpkin powered, changing to Jack o' Lantern at world@3,65,3"));
    assert!(output.contains("Jack o' Lantern unpowered, reverting to Pumpkin at world@3,65,3"));
    assert!(output.contains("Block at world@3,65,3 is being broken (previously changed)."));
    assert_eq!(output.matches("changing to").count(), 2);
}

/// With notifications off, transitions are silent but lifecycle lines remain.
#[test]
fn test_disabled_notifications_stay_silent() {
    let output = cycle_with_config("notifications-enabled: false\n");

    assert!(output.contains("PumpkinPowerPlugin enabled!"));
    assert!(output.contains("PumpkinPowerPlugin disabled."));
    assert!(!output.contains("changing to"));
    assert!(!output.contains("reverting to"));
    assert!(!output.contains("is being broken"));
}
