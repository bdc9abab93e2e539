//! Terminal session and event loop
//!
//! Events are read and dispatched one at a time on the calling thread. A store
//! write blocks only the handling of the key that triggered it.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::app::{input, App};
use crate::store::Store;
use crate::ui;

/// Restores the terminal when dropped, including during a panic
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Must not panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the interface until the user quits
pub fn run(store: &Store, app: &mut App) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to start terminal")?;
    terminal.clear()?;

    tracing::info!("Interface started");

    while !app.should_quit() {
        terminal.draw(|f| ui::render(f, app))?;

        // Resize and focus events just trigger the next redraw
        let TermEvent::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(event) = input::map_key(app, key) {
            app.dispatch(store, event)?;
        }
    }

    terminal.show_cursor()?;
    tracing::info!("Interface closed");
    Ok(())
}
