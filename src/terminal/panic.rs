//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state when the application panics,
//! so a crash doesn't leave the user's shell in raw mode with the mouse
//! captured.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then chains to the
/// original hook so the panic message still prints. Call early in
/// `main()`, before entering TUI mode.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
