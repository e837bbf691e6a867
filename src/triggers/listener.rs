//! Listener contract used by hosts to bind handlers.

use crate::host::HostBlock;

use super::event::EventKind;

/// Something the host can register and call back.
///
/// Hosts call [`Listener::subscriptions`] once at registration and then
/// deliver only those kinds, one notification at a time.
pub trait Listener {
    /// Notification kinds this listener wants.
    fn subscriptions(&self) -> &[EventKind];

    /// A block's physics changed. The handler may change the block's type.
    fn on_power_changed(&mut self, block: &mut dyn HostBlock);

    /// A block is being broken. Removal always proceeds.
    fn on_removed(&mut self, block: &dyn HostBlock);

    /// Check whether a kind is subscribed.
    fn wants(&self, kind: EventKind) -> bool {
        self.subscriptions().contains(&kind)
    }
}
