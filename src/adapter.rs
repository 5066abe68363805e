//! Event adapter: host notifications in, controller transitions out.
//!
//! Each event is applied synchronously before returning; the host guarantees
//! serialized delivery, so no queue sits in front of the controller.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::host::{ButtonHandle, EventSource, Subscriptions, WidgetHost};
use crate::prefs::BarPrefs;
use crate::project;
use crate::protocol;
use crate::status::DebugStatus;
use crate::visibility::{ButtonSet, VisibilityController};

/// Host-delivered session notification, already shaped into a closed set.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A debug session began; the workspace root (when known) hosts the
    /// project-kind marker probe.
    Started { workspace_root: Option<PathBuf> },
    /// The session ended, successfully or not.
    Terminated,
    /// Raw protocol traffic, decoded at this boundary.
    Protocol(Value),
}

/// The bar itself: adapter plus owned visibility controller.
pub struct StatusBar<H: ButtonHandle> {
    controller: VisibilityController<H>,
}

impl<H: ButtonHandle> StatusBar<H> {
    /// Create every widget and show the idle row.
    pub fn new<W>(host: &mut W, prefs: &BarPrefs) -> Self
    where
        W: WidgetHost<Handle = H>,
    {
        Self {
            controller: VisibilityController::new(host, prefs),
        }
    }

    /// Apply one host notification. Unrecognized protocol messages are
    /// dropped silently; nothing here can fail.
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started { workspace_root } => {
                debug!(root = ?workspace_root, "debug session started");
                self.controller.session_started();
                // Probe after the initial recompute so the bar reacts to the
                // launch immediately; the flag only triggers a second
                // recompute when the marker is actually present.
                let dart_like = workspace_root
                    .as_deref()
                    .is_some_and(project::is_dart_like);
                self.controller.set_dart_like(dart_like);
            }
            SessionEvent::Terminated => {
                debug!("debug session terminated");
                self.controller.session_terminated();
            }
            SessionEvent::Protocol(raw) => {
                self.controller.apply_trigger(protocol::decode(&raw));
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> DebugStatus {
        self.controller.status()
    }

    #[must_use]
    pub fn dart_like(&self) -> bool {
        self.controller.dart_like()
    }

    #[must_use]
    pub fn visible(&self) -> ButtonSet {
        self.controller.visible()
    }
}

/// Wire the bar to a host: create widgets, register one listener for the
/// session event stream, and return both the bar and the subscription bag.
/// Dropping the bag is deactivation; events stop reaching the bar.
pub fn activate<W, S>(
    widgets: &mut W,
    events: &mut S,
    prefs: &BarPrefs,
) -> (Rc<RefCell<StatusBar<W::Handle>>>, Subscriptions<S::Handle>)
where
    W: WidgetHost,
    W::Handle: 'static,
    S: EventSource,
{
    let bar = Rc::new(RefCell::new(StatusBar::new(widgets, prefs)));
    let mut subscriptions = Subscriptions::new();
    let sink = Rc::clone(&bar);
    subscriptions.push(events.subscribe(Box::new(move |event| {
        sink.borrow_mut().handle_event(event);
    })));
    (bar, subscriptions)
}
