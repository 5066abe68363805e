//! Boundary decode of loosely-typed debug-protocol messages.
//!
//! Protocol traffic arrives as a JSON object that may carry a `command`
//! string (host-to-adapter acknowledgment) or an `event` string
//! (adapter-to-host notification). Everything the bar reacts to is decoded
//! here into a closed trigger set; anything else collapses to
//! [`Trigger::Unknown`] before it can reach the state machine.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

/// The closed set of protocol signals the status machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// `configurationDone` acknowledged; launch handshake is complete.
    ConfigurationDone,
    /// A `pause` command went through.
    PauseRequested,
    /// A `continue` command went through.
    ContinueRequested,
    /// The debuggee reported a `stopped` event (breakpoint, step, entry...).
    Stopped,
    /// Anything else, dropped silently.
    Unknown,
}

#[derive(Debug, Default, Deserialize)]
struct RawMessage {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    event: Option<String>,
}

/// Decode one raw protocol message into a transition trigger.
///
/// Malformed payloads (non-objects, wrong field types) decode to `Unknown`;
/// there is no error path out of this function.
#[must_use]
pub fn decode(message: &Value) -> Trigger {
    let raw = match RawMessage::deserialize(message) {
        Ok(raw) => raw,
        Err(_) => return Trigger::Unknown,
    };
    let trigger = if let Some(command) = raw.command.as_deref() {
        match command {
            "configurationDone" => Trigger::ConfigurationDone,
            "pause" => Trigger::PauseRequested,
            "continue" => Trigger::ContinueRequested,
            _ => Trigger::Unknown,
        }
    } else {
        match raw.event.as_deref() {
            Some("stopped") => Trigger::Stopped,
            _ => Trigger::Unknown,
        }
    };
    trace!(?trigger, "decoded protocol message");
    trigger
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn decodes_known_commands() {
        assert_eq!(
            decode(&json!({"command": "configurationDone"})),
            Trigger::ConfigurationDone
        );
        assert_eq!(decode(&json!({"command": "pause"})), Trigger::PauseRequested);
        assert_eq!(
            decode(&json!({"command": "continue", "seq": 42})),
            Trigger::ContinueRequested
        );
    }

    #[test]
    fn decodes_stopped_event() {
        assert_eq!(
            decode(&json!({"event": "stopped", "body": {"reason": "breakpoint"}})),
            Trigger::Stopped
        );
    }

    #[test]
    fn command_field_wins_over_event_field() {
        // A message carrying both fields is treated as an acknowledgment.
        assert_eq!(
            decode(&json!({"command": "pause", "event": "stopped"})),
            Trigger::PauseRequested
        );
    }

    #[test]
    fn unrecognized_and_malformed_messages_are_unknown() {
        assert_eq!(decode(&json!({"command": "stepIn"})), Trigger::Unknown);
        assert_eq!(decode(&json!({"event": "continued"})), Trigger::Unknown);
        assert_eq!(decode(&json!({})), Trigger::Unknown);
        assert_eq!(decode(&json!({"command": 7})), Trigger::Unknown);
        assert_eq!(decode(&json!("not an object")), Trigger::Unknown);
        assert_eq!(decode(&json!(null)), Trigger::Unknown);
    }

    proptest! {
        #[test]
        fn arbitrary_commands_outside_the_set_are_unknown(command in "\\PC*") {
            prop_assume!(!matches!(
                command.as_str(),
                "configurationDone" | "pause" | "continue"
            ));
            prop_assert_eq!(decode(&json!({"command": command})), Trigger::Unknown);
        }

        #[test]
        fn arbitrary_events_other_than_stopped_are_unknown(event in "\\PC*") {
            prop_assume!(event != "stopped");
            prop_assert_eq!(decode(&json!({"event": event})), Trigger::Unknown);
        }
    }
}
