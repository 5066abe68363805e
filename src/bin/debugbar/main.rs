//! Terminal host simulator so the whole pipeline is exercisable from a shell.
//!
//! Stands in for the editor host: widgets render as ANSI pills on stdout,
//! session events come from a scripted channel bus. Each scripted event is
//! pumped through the adapter and the resulting button row is printed, so
//! the bar's reaction to the debugger lifecycle can be eyeballed directly.

mod events;
mod render;
mod script;

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::size as terminal_size;
use debugbar::{activate, init_logging, BarPrefs, ButtonId, project};

use crate::events::ChannelBus;
use crate::render::AnsiWidgetHost;
use crate::script::session_script;

/// Max pending session events before the scripted feed blocks.
const BUS_CAPACITY: usize = 64;

const FALLBACK_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "debugbar", about = "Replay a scripted debug session against the status bar")]
struct Cli {
    /// Workspace root probed for the project marker file.
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Simulate a dart-like workspace (scratch root with a marker file).
    #[arg(long, conflicts_with = "workspace")]
    dart: bool,

    /// Preferences file (TOML); a missing file falls back to defaults.
    #[arg(long, env = "DEBUGBAR_PREFS")]
    prefs: Option<PathBuf>,

    /// Disable ANSI colors in the rendered row.
    #[arg(long)]
    no_color: bool,

    /// Milliseconds between scripted events.
    #[arg(long, default_value_t = 400)]
    step_ms: u64,

    /// Print the button descriptor table and exit.
    #[arg(long)]
    list_buttons: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.list_buttons {
        list_buttons();
        return Ok(());
    }

    let prefs = match &cli.prefs {
        Some(path) => BarPrefs::load(path)?,
        None => BarPrefs::default(),
    };

    let scratch = if cli.dart {
        Some(make_scratch_workspace()?)
    } else {
        None
    };
    let workspace = cli.workspace.clone().or_else(|| scratch.clone());

    let mut widgets = AnsiWidgetHost::new(!cli.no_color);
    let mut bus = ChannelBus::new(BUS_CAPACITY);
    let (_bar, subscriptions) = activate(&mut widgets, &mut bus, &prefs);

    let width = terminal_size()
        .map(|(w, _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH);
    let tx = bus.sender();

    for step in session_script(workspace) {
        tx.send(step.event)
            .context("scripted event feed disconnected")?;
        bus.pump();
        println!("{:>20}  {}", step.note, widgets.render_row(width));
        thread::sleep(Duration::from_millis(cli.step_ms));
    }

    // Deactivation: listeners detach before the bus goes away.
    drop(subscriptions);

    if let Some(root) = scratch {
        fs::remove_dir_all(root).ok();
    }
    Ok(())
}

fn list_buttons() {
    println!("Status-bar debug buttons:");
    for id in ButtonId::ALL {
        let spec = id.spec();
        println!(
            "  {:<12} icon={:<14} command={:<18} priority slot {}",
            format!("{id:?}"),
            spec.icon,
            spec.command.unwrap_or("-"),
            id.init(&BarPrefs::default()).priority,
        );
    }
}

fn make_scratch_workspace() -> Result<PathBuf> {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let root = std::env::temp_dir().join(format!("debugbar-sim-{nonce}"));
    fs::create_dir_all(&root)
        .with_context(|| format!("creating scratch workspace {}", root.display()))?;
    fs::write(root.join(project::DART_MARKER_FILE), "name: debugbar_sim\n")
        .context("writing project marker file")?;
    Ok(root)
}
