//! Linkman CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI wires [`linkman_config`] (settings) into [`linkman_tui`]
//! (screens and rendering), with RAII terminal management that restores the
//! terminal on every exit path.
//!
//! ```text
//! main() -> load config -> SwipeTuning per list -> App
//!                                                   |
//!                               TerminalSession -> run_app() -> Quit
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) frame cadence drives both input and animation:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`linkman_tui::InputPump`])
//! 3. Advance row animations by one frame (`app.tick()`)
//! 4. Render frame

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use linkman_config::{LinkmanConfig, UiOptions};
use linkman_core::SwipeTuning;
use linkman_tui::{App, InputPump, draw, handle_events, sample_contacts, sample_conversations};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.linkman/logs/linkman.log
    if let Some(config_path) = LinkmanConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("linkman.log"));
    }

    // Fallback: ./.linkman/logs/linkman.log
    candidates.push(PathBuf::from(".linkman").join("logs").join("linkman.log"));

    candidates
}

/// Resolve both list tunings, falling back to the stock presets when the
/// `[swipe]` table does not validate.
fn list_tunings(config: &LinkmanConfig, ui: &UiOptions) -> (SwipeTuning, SwipeTuning) {
    let resolve = |preset: SwipeTuning, list: &str| {
        config
            .swipe_tuning(preset, ui)
            .unwrap_or_else(|err| {
                tracing::warn!(list, "Ignoring swipe settings: {err}");
                SwipeTuning {
                    reduced_motion: ui.reduced_motion,
                    ..preset
                }
            })
    };
    (
        resolve(SwipeTuning::conversations(), "conversations"),
        resolve(SwipeTuning::contacts(), "contacts"),
    )
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, the alternate screen, mouse capture (drags drive the
/// rows) and focus reporting (losing focus closes the open row). On drop,
/// all of it is restored, even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        ) {
            let _ = disable_raw_mode();
            let _ = execute!(
                out,
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(
                    stdout(),
                    DisableFocusChange,
                    DisableMouseCapture,
                    LeaveAlternateScreen
                );
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match LinkmanConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("Falling back to default settings: {err}");
            LinkmanConfig::default()
        }
    };
    let ui = config.ui_options();
    let (chat_tuning, contact_tuning) = list_tunings(&config, &ui);
    tracing::info!(
        reduced_motion = ui.reduced_motion,
        units_per_column = ui.units_per_column,
        "Starting"
    );

    let now = chrono::Local::now().naive_local();
    let mut app = App::new(
        ui,
        chat_tuning,
        contact_tuning,
        sample_conversations(now),
        sample_contacts(),
        now,
    );

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last = tokio::time::Instant::now();

    let result: Result<()> = loop {
        let at = frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        // Skipped ticks still advance animations by real elapsed time.
        app.tick(at.duration_since(last));
        last = at;
        app.set_now(chrono::Local::now().naive_local());

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
