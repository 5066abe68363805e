//! Static descriptors for the status-bar debug buttons.
//!
//! Descriptors are immutable: icon, optional label, optional bound command,
//! optional color, and a stable placement priority. Widgets are created once
//! at activation and only ever toggled between shown and hidden afterwards.

use serde::Deserialize;

use crate::prefs::{Alignment, BarPrefs, ColorSource};

/// Placement priority of the leftmost button; the rest descend from here so
/// the row keeps a fixed order.
pub const BASE_PRIORITY: i32 = 20;

/// The seven logical buttons the bar can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonId {
    Start,
    Starting,
    Continue,
    Pause,
    HotReload,
    Restart,
    Stop,
}

/// How a button is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Named color resolved from the host's debug theme palette.
    Theme(&'static str),
    /// Literal color passed straight through to the widget.
    Raw(&'static str),
}

/// Immutable descriptor backing one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub icon: &'static str,
    pub label: Option<&'static str>,
    pub command: Option<&'static str>,
    pub color: Option<ColorSpec>,
}

impl ButtonSpec {
    /// Color under the chosen source. Theme colors only apply in debug-theme
    /// mode; raw accent colors apply in both modes.
    #[must_use]
    pub fn color_for(&self, source: ColorSource) -> Option<ColorSpec> {
        match (self.color, source) {
            (Some(ColorSpec::Theme(_)), ColorSource::StatusBarTheme) => None,
            (color, _) => color,
        }
    }
}

/// Everything the host needs to materialize one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonInit {
    pub id: ButtonId,
    pub icon: &'static str,
    pub label: Option<&'static str>,
    pub command: Option<&'static str>,
    pub color: Option<ColorSpec>,
    pub priority: i32,
    pub alignment: Alignment,
}

impl ButtonId {
    /// Stable iteration order, leftmost first.
    pub const ALL: [ButtonId; 7] = [
        ButtonId::Start,
        ButtonId::Starting,
        ButtonId::Continue,
        ButtonId::Pause,
        ButtonId::HotReload,
        ButtonId::Restart,
        ButtonId::Stop,
    ];

    /// Static descriptor for this button.
    #[must_use]
    pub fn spec(self) -> ButtonSpec {
        match self {
            ButtonId::Start => ButtonSpec {
                icon: "debug-start",
                label: Some("Start debugging"),
                command: Some("debug.start"),
                color: Some(ColorSpec::Theme("debugIcon.startForeground")),
            },
            ButtonId::Starting => ButtonSpec {
                icon: "loading~spin",
                label: Some("Starting..."),
                command: None,
                color: None,
            },
            ButtonId::Continue => ButtonSpec {
                icon: "debug-continue",
                label: None,
                command: Some("debug.continue"),
                color: Some(ColorSpec::Theme("debugIcon.continueForeground")),
            },
            ButtonId::Pause => ButtonSpec {
                icon: "debug-pause",
                label: None,
                command: Some("debug.pause"),
                color: Some(ColorSpec::Theme("debugIcon.pauseForeground")),
            },
            ButtonId::HotReload => ButtonSpec {
                icon: "zap",
                label: None,
                command: Some("debug.hotReload"),
                color: Some(ColorSpec::Raw("yellow")),
            },
            ButtonId::Restart => ButtonSpec {
                icon: "debug-restart",
                label: None,
                command: Some("debug.restart"),
                color: Some(ColorSpec::Theme("debugIcon.restartForeground")),
            },
            ButtonId::Stop => ButtonSpec {
                icon: "debug-stop",
                label: None,
                command: Some("debug.stop"),
                color: Some(ColorSpec::Theme("debugIcon.stopForeground")),
            },
        }
    }

    /// Offset below [`BASE_PRIORITY`]. Buttons that can never be visible at
    /// the same time share a slot.
    #[must_use]
    fn priority_offset(self) -> i32 {
        match self {
            ButtonId::Start | ButtonId::Starting | ButtonId::Continue | ButtonId::Pause => 0,
            ButtonId::HotReload => 1,
            ButtonId::Restart => 2,
            ButtonId::Stop => 3,
        }
    }

    /// Resolve the full widget-creation payload under the given preferences.
    #[must_use]
    pub fn init(self, prefs: &BarPrefs) -> ButtonInit {
        let spec = self.spec();
        ButtonInit {
            id: self,
            icon: spec.icon,
            label: spec.label,
            command: spec.command,
            color: spec.color_for(prefs.color_source),
            priority: prefs.base_priority - self.priority_offset(),
            alignment: prefs.alignment,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
