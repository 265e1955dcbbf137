//! Terminal host for the board widget.

mod app;
mod input;
mod ui;

pub use app::{App, HostState};
pub use input::{KeyAction, key_action, pointer_phase};

use crate::config::ViewConfig;
use crate::persistence::InstanceState;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Options for a terminal session.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Widget appearance.
    pub config: ViewConfig,
    /// File the board is restored from and saved to.
    pub state_path: PathBuf,
    /// Ignore any saved board.
    pub fresh: bool,
}

/// Puts the terminal in raw/alternate-screen mode, undone on drop.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the board in the terminal until the user quits, then saves it.
#[instrument(skip_all, fields(state_path = %options.state_path.display(), fresh = options.fresh))]
pub fn run_tui(options: TuiOptions) -> Result<()> {
    info!("Starting terminal host");

    let mut app = App::new(&options.config);
    if !options.fresh && options.state_path.exists() {
        match InstanceState::<HostState>::load_from(&options.state_path) {
            Ok(state) => {
                if let Err(e) = app.restore(state) {
                    warn!(error = %e, "Saved board rejected, starting blank");
                }
            }
            Err(e) => warn!(error = %e, "Could not read saved board, starting blank"),
        }
    }

    {
        let _session = TerminalSession::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let size = terminal.size()?;
        app.resize(Rect::new(0, 0, size.width, size.height));

        while !app.should_quit() {
            if app.take_redraw() {
                terminal.draw(|frame| ui::draw(frame, &app))?;
            }
            if event::poll(Duration::from_millis(250))? {
                app.handle_event(event::read()?);
            }
        }
        terminal.show_cursor()?;
    }

    app.save()
        .save_to(&options.state_path)
        .context("Failed to save board")?;
    info!("Terminal host exited");
    Ok(())
}
