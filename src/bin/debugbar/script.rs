//! Canned debug-session script the simulator replays through the adapter.

use std::path::PathBuf;

use debugbar::SessionEvent;
use serde_json::json;

pub(crate) struct ScriptStep {
    pub(crate) note: &'static str,
    pub(crate) event: SessionEvent,
}

/// One full session: launch, handshake, a breakpoint stop, resume, an
/// explicit pause, and termination. Includes one message the bar must
/// ignore so the silent-drop path is visible in the output.
pub(crate) fn session_script(workspace_root: Option<PathBuf>) -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            note: "session started",
            event: SessionEvent::Started { workspace_root },
        },
        ScriptStep {
            note: "configurationDone",
            event: SessionEvent::Protocol(json!({"command": "configurationDone"})),
        },
        ScriptStep {
            note: "stepIn (ignored)",
            event: SessionEvent::Protocol(json!({"command": "stepIn"})),
        },
        ScriptStep {
            note: "stopped event",
            event: SessionEvent::Protocol(json!({
                "event": "stopped",
                "body": {"reason": "breakpoint"}
            })),
        },
        ScriptStep {
            note: "continue",
            event: SessionEvent::Protocol(json!({"command": "continue"})),
        },
        ScriptStep {
            note: "pause",
            event: SessionEvent::Protocol(json!({"command": "pause"})),
        },
        ScriptStep {
            note: "session terminated",
            event: SessionEvent::Terminated,
        },
    ]
}
