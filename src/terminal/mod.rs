//! Terminal state management for the viewer.
//!
//! Entering TUI mode switches to the alternate screen with raw mode and
//! mouse capture; [`restore`] undoes all of it. [`setup_panic_hook`]
//! makes sure the undo also happens on a crash.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Enter TUI mode and hand back the terminal to draw on.
pub fn enter() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave TUI mode, restoring the caller's terminal.
pub fn restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
