//! Project-kind detection: a marker file at the workspace root decides
//! whether the hot-reload button is offered at all.

use std::path::Path;

use tracing::debug;

/// Marker whose presence flags a Dart/Flutter-style workspace.
pub const DART_MARKER_FILE: &str = "pubspec.yaml";

/// Best-effort probe, run once per session start. A missing root, an
/// unreadable directory, and plain absence all count as "not dart-like".
#[must_use]
pub fn is_dart_like(workspace_root: &Path) -> bool {
    let found = workspace_root.join(DART_MARKER_FILE).is_file();
    debug!(root = %workspace_root.display(), found, "project marker probe");
    found
}
