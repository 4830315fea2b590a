//! UI rendering for the optswitch viewer.
//!
//! Layout: the scene viewport on the left, the tag sidebar on the right,
//! a one-line status bar at the bottom. The context-menu overlay and the
//! hover tooltip draw on top of everything else.

mod overlay;
mod sidebar;
mod status;
mod theme;
mod viewport;

pub use overlay::{MenuOverlay, OverlayEntry};

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::tool::ToolEvents;

/// Width of the tag sidebar, in cells.
const SIDEBAR_WIDTH: u16 = 32;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
        .split(rows[0]);

    viewport::render(frame, app, columns[0]);
    sidebar::render(frame, app, columns[1]);
    status::render(frame, app, rows[1]);

    if let Some(menu) = &mut app.menu {
        overlay::render(frame, menu);
    } else if let (Some(text), Some(pointer)) = (app.tool.tooltip(), app.pointer) {
        viewport::render_tooltip(frame, &text, pointer);
    }
}
