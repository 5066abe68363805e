//! Host-boundary traits: widget creation and event subscription.
//!
//! The embedding host supplies both halves. Widgets are created once at
//! activation and owned by the controller; listener registrations are
//! explicit acquire/release pairs collected in a [`Subscriptions`] bag that
//! detaches everything at deactivation.

use crate::adapter::SessionEvent;
use crate::buttons::ButtonInit;

/// One status-bar button widget.
pub trait ButtonHandle {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Creates button widgets. Called exactly once per button at activation.
pub trait WidgetHost {
    type Handle: ButtonHandle;

    fn create_button(&mut self, init: &ButtonInit) -> Self::Handle;
}

/// Receipt for one registered listener; disposing detaches it.
pub trait ListenerHandle {
    fn dispose(&mut self);
}

/// Callback invoked for each host-delivered session event.
pub type EventListener = Box<dyn FnMut(SessionEvent)>;

/// Source of session lifecycle and protocol notifications. The host
/// guarantees serialized delivery; listeners run synchronously per event.
pub trait EventSource {
    type Handle: ListenerHandle;

    fn subscribe(&mut self, listener: EventListener) -> Self::Handle;
}

/// Teardown bag: holds listener handles for the life of the bar and
/// disposes them all when dropped at deactivation.
pub struct Subscriptions<L: ListenerHandle> {
    handles: Vec<L>,
}

impl<L: ListenerHandle> Subscriptions<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn push(&mut self, handle: L) {
        self.handles.push(handle);
    }
}

impl<L: ListenerHandle> Default for Subscriptions<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ListenerHandle> Drop for Subscriptions<L> {
    fn drop(&mut self) {
        for handle in &mut self.handles {
            handle.dispose();
        }
    }
}
