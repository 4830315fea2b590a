//! Color palette for the viewer.

use ratatui::style::Color;

pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_ENTITY: Color = Color::Gray;
/// Entities belonging to the group under the pointer.
pub const COLOR_GROUP: Color = Color::Cyan;
pub const COLOR_HIDDEN: Color = Color::DarkGray;
pub const COLOR_STATUS: Color = Color::Gray;
pub const COLOR_TOOLTIP: Color = Color::Yellow;
pub const COLOR_MENU_SELECTED: Color = Color::Cyan;
