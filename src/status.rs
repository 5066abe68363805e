//! Debug-session lifecycle states and the guarded transition table.

use tracing::debug;

use crate::protocol::Trigger;

/// Where the active debug session currently is. Exactly one value is held
/// for the life of the bar; it cycles and never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugStatus {
    /// No session; only the start button is offered.
    NotStarted,
    /// Session launched but `configurationDone` has not arrived yet.
    Starting,
    /// Debuggee suspended at a stop point.
    Paused,
    /// Debuggee executing.
    Running,
}

impl DebugStatus {
    pub const ALL: [DebugStatus; 4] = [
        DebugStatus::NotStarted,
        DebugStatus::Starting,
        DebugStatus::Paused,
        DebugStatus::Running,
    ];

    /// Apply one decoded protocol trigger and return the next status.
    ///
    /// Triggers that are not valid for the current status leave it unchanged:
    /// `continue` is only honored from `Paused`, `pause`/`stopped` only from
    /// `Running`, and `configurationDone` only from `Starting`. `Unknown`
    /// never moves anything.
    #[must_use]
    pub fn apply(self, trigger: Trigger) -> DebugStatus {
        let next = match (self, trigger) {
            (DebugStatus::Starting, Trigger::ConfigurationDone) => DebugStatus::Running,
            (DebugStatus::Running, Trigger::PauseRequested | Trigger::Stopped) => {
                DebugStatus::Paused
            }
            (DebugStatus::Paused, Trigger::ContinueRequested) => DebugStatus::Running,
            (current, _) => current,
        };
        if next != self {
            debug!(from = ?self, to = ?next, ?trigger, "debug status transition");
        }
        next
    }

    /// True while a debuggee is live, i.e. the window where hot reload
    /// makes sense.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, DebugStatus::Paused | DebugStatus::Running)
    }
}
