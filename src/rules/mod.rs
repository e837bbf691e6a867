//! The block swap rule.
//!
//! The rule is a pair of pure functions over explicit state:
//! - `on_power_change` decides whether a block swaps form
//! - `on_remove` decides whether breaking a block is worth a log line
//!
//! Host wiring lives in `plugin`; nothing here performs I/O.

pub mod engine;

pub use engine::{on_power_change, on_remove, PowerOutcome, RuleState, SwapRule};
