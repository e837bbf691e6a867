//! Host notifications and listener registration.
//!
//! The host owns event dispatch. This module describes what it delivers
//! ([`BlockEvent`], [`EventKind`]) and what a listener exposes to be
//! registered ([`Listener`]).

mod event;
mod listener;

pub use event::{BlockEvent, EventKind};
pub use listener::Listener;
