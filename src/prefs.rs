//! User preferences for the button bar.
//!
//! Loaded from a TOML file when the host provides one; a missing file means
//! defaults. A button removed from `buttons` is never shown regardless of
//! debug status.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::buttons::{ButtonId, BASE_PRIORITY};
use crate::visibility::ButtonSet;

/// Which palette the buttons take their colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSource {
    #[default]
    DebugTheme,
    StatusBarTheme,
}

/// Which end of the status bar the row anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Bar preferences as read from `debugbar.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BarPrefs {
    /// Buttons the user wants at all; defaults to every button.
    pub buttons: Vec<ButtonId>,
    pub color_source: ColorSource,
    pub alignment: Alignment,
    pub base_priority: i32,
}

impl Default for BarPrefs {
    fn default() -> Self {
        Self {
            buttons: ButtonId::ALL.to_vec(),
            color_source: ColorSource::default(),
            alignment: Alignment::default(),
            base_priority: BASE_PRIORITY,
        }
    }
}

impl BarPrefs {
    /// Read preferences from `path`. A missing file falls back to defaults;
    /// an unreadable or invalid file is an error the caller can surface.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading preferences file {}", path.display()));
            }
        };
        toml::from_str(&text)
            .with_context(|| format!("invalid preferences file {}", path.display()))
    }

    /// The enabled buttons as a set.
    #[must_use]
    pub fn enabled_set(&self) -> ButtonSet {
        self.buttons
            .iter()
            .fold(ButtonSet::EMPTY, |set, id| set.with(*id))
    }
}
