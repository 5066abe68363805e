//! ANSI status-row renderer implementing the widget host for the simulator.
//!
//! Each created button becomes a pill in a shared row. Show/hide calls flip
//! a flag; rendering sorts visible pills by placement priority so the row
//! order matches what the real status bar would do.

use std::cell::RefCell;
use std::rc::Rc;

use debugbar::{Alignment, ButtonHandle, ButtonId, ButtonInit, ColorSpec, WidgetHost};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

#[derive(Default)]
struct RowState {
    buttons: Vec<(ButtonInit, bool)>,
}

pub(crate) struct AnsiWidgetHost {
    row: Rc<RefCell<RowState>>,
    color: bool,
}

pub(crate) struct AnsiButton {
    id: ButtonId,
    row: Rc<RefCell<RowState>>,
}

impl AnsiWidgetHost {
    pub(crate) fn new(color: bool) -> Self {
        Self {
            row: Rc::new(RefCell::new(RowState::default())),
            color,
        }
    }

    /// Render the currently shown buttons as one row, padded or right-aligned
    /// to `width` columns.
    pub(crate) fn render_row(&self, width: usize) -> String {
        let row = self.row.borrow();
        let mut visible: Vec<&ButtonInit> = row
            .buttons
            .iter()
            .filter(|(_, shown)| *shown)
            .map(|(init, _)| init)
            .collect();
        // Higher priority sits further left, matching status-bar placement.
        visible.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut styled = String::new();
        let mut plain_width = 0usize;
        for (idx, init) in visible.iter().enumerate() {
            if idx > 0 {
                styled.push(' ');
                plain_width += 1;
            }
            let text = pill_text(init);
            plain_width += text.width();
            if self.color {
                styled.push_str(&format!(
                    "{}[{}{}{}]{}",
                    DIM,
                    reset_then(self.color, ansi_for(init.color)),
                    text,
                    reset_then(self.color, DIM),
                    RESET
                ));
            } else {
                styled.push_str(&format!("[{text}]"));
            }
            plain_width += 2;
        }

        let padding = width.saturating_sub(plain_width);
        let alignment = visible
            .first()
            .map_or(Alignment::Left, |init| init.alignment);
        match alignment {
            Alignment::Left => styled,
            Alignment::Right => format!("{}{}", " ".repeat(padding), styled),
        }
    }
}

fn reset_then(color: bool, code: &str) -> String {
    if color {
        format!("{RESET}{code}")
    } else {
        String::new()
    }
}

/// Terminal stand-in for the host's icon font.
fn glyph(icon: &str) -> &'static str {
    match icon {
        "debug-start" | "debug-continue" => "\u{25b6}",
        "loading~spin" => "\u{27f3}",
        "debug-pause" => "\u{2016}",
        "zap" => "\u{26a1}",
        "debug-restart" => "\u{21bb}",
        "debug-stop" => "\u{25a0}",
        _ => "?",
    }
}

fn fallback_label(id: ButtonId) -> &'static str {
    match id {
        ButtonId::Start => "start",
        ButtonId::Starting => "starting",
        ButtonId::Continue => "continue",
        ButtonId::Pause => "pause",
        ButtonId::HotReload => "reload",
        ButtonId::Restart => "restart",
        ButtonId::Stop => "stop",
    }
}

fn pill_text(init: &ButtonInit) -> String {
    let label = init.label.unwrap_or_else(|| fallback_label(init.id));
    format!("{} {}", glyph(init.icon), label)
}

fn ansi_for(color: Option<ColorSpec>) -> &'static str {
    match color {
        Some(ColorSpec::Raw("yellow")) => "\x1b[33m",
        Some(ColorSpec::Raw(_)) => "",
        Some(ColorSpec::Theme(id)) => match id {
            "debugIcon.startForeground" | "debugIcon.continueForeground" => "\x1b[32m",
            "debugIcon.pauseForeground" => "\x1b[36m",
            "debugIcon.restartForeground" => "\x1b[32m",
            "debugIcon.stopForeground" => "\x1b[31m",
            _ => "",
        },
        None => "",
    }
}

impl ButtonHandle for AnsiButton {
    fn show(&mut self) {
        set_shown(&self.row, self.id, true);
    }

    fn hide(&mut self) {
        set_shown(&self.row, self.id, false);
    }
}

fn set_shown(row: &Rc<RefCell<RowState>>, id: ButtonId, shown: bool) {
    let mut row = row.borrow_mut();
    if let Some(entry) = row.buttons.iter_mut().find(|(init, _)| init.id == id) {
        entry.1 = shown;
    }
}

impl WidgetHost for AnsiWidgetHost {
    type Handle = AnsiButton;

    fn create_button(&mut self, init: &ButtonInit) -> AnsiButton {
        self.row.borrow_mut().buttons.push((*init, false));
        AnsiButton {
            id: init.id,
            row: Rc::clone(&self.row),
        }
    }
}
