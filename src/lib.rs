//! Status-bar debug controls that mirror the active debug session.
//!
//! The host delivers session lifecycle notifications and raw debug-protocol
//! traffic; the adapter decodes both into a closed trigger set, and the
//! visibility controller flips each button widget between shown and hidden
//! so the bar always matches the debugger's state.
//!
//! # Architecture
//!
//! - [`adapter`]: host notifications in, controller transitions out
//! - [`visibility`]: owns the debug status and every widget handle
//! - [`protocol`]: boundary decode of loosely-typed protocol messages
//! - [`host`]: traits the embedding host implements (widgets, events)

pub mod adapter;
pub mod buttons;
pub mod host;
mod logging;
pub mod prefs;
pub mod project;
pub mod protocol;
pub mod status;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;

pub use adapter::{activate, SessionEvent, StatusBar};
pub use buttons::{ButtonId, ButtonInit, ButtonSpec, ColorSpec};
pub use host::{
    ButtonHandle, EventListener, EventSource, ListenerHandle, Subscriptions, WidgetHost,
};
pub use logging::init_logging;
pub use prefs::{Alignment, BarPrefs, ColorSource};
pub use protocol::Trigger;
pub use status::DebugStatus;
pub use visibility::{visible_buttons, ButtonSet, VisibilityController};
