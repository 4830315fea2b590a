//! Context-menu overlay.
//!
//! The overlay doubles as the host's [`MenuBuilder`]: the tool populates
//! it on a right-click, and the same object then carries the selection
//! state while the menu is up. Activation is reported back to the tool by
//! item id.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::traits::{MenuBuilder, MenuItemId};

/// One rendered menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEntry {
    Item {
        id: MenuItemId,
        label: String,
        checked: bool,
    },
    Separator,
}

/// A context menu anchored at the right-click position.
#[derive(Debug)]
pub struct MenuOverlay {
    anchor: (u16, u16),
    entries: Vec<OverlayEntry>,
    /// Index into `entries`; always points at an `Item`.
    selected: usize,
    next_id: u32,
    /// Popup rectangle from the last render, for mouse hit-testing.
    area: Rect,
}

impl MenuOverlay {
    pub fn new(anchor: (u16, u16)) -> Self {
        Self {
            anchor,
            entries: Vec::new(),
            selected: 0,
            next_id: 0,
            area: Rect::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    /// Id of the entry the selection bar is on.
    pub fn selected_id(&self) -> Option<MenuItemId> {
        match self.entries.get(self.selected) {
            Some(OverlayEntry::Item { id, .. }) => Some(*id),
            _ => None,
        }
    }

    /// Move the selection bar down, skipping separators, wrapping.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Move the selection bar up, skipping separators, wrapping.
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, direction: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        let mut candidate = self.selected as isize;
        for _ in 0..len {
            candidate = (candidate + direction).rem_euclid(len);
            if matches!(self.entries[candidate as usize], OverlayEntry::Item { .. }) {
                self.selected = candidate as usize;
                return;
            }
        }
    }

    /// Map a mouse position to the entry it lands on, and move the
    /// selection there. Returns the item id, or `None` when the click is
    /// outside the popup or on a separator.
    pub fn hit(&mut self, x: u16, y: u16) -> Option<MenuItemId> {
        let inner = self.area.inner(ratatui::layout::Margin::new(1, 1));
        if x < inner.x || x >= inner.x + inner.width || y < inner.y || y >= inner.y + inner.height {
            return None;
        }
        let index = (y - inner.y) as usize;
        match self.entries.get(index) {
            Some(OverlayEntry::Item { id, .. }) => {
                self.selected = index;
                Some(*id)
            }
            _ => None,
        }
    }
}

impl MenuBuilder for MenuOverlay {
    fn add_item(&mut self, label: &str) -> MenuItemId {
        let id = MenuItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(OverlayEntry::Item {
            id,
            label: label.to_string(),
            checked: false,
        });
        id
    }

    fn set_checked(&mut self, item: MenuItemId, checked: bool) {
        for entry in &mut self.entries {
            if let OverlayEntry::Item { id, checked: c, .. } = entry {
                if *id == item {
                    *c = checked;
                }
            }
        }
    }

    fn add_separator(&mut self) {
        self.entries.push(OverlayEntry::Separator);
    }
}

/// Draw the popup, clamped to the frame.
pub fn render(frame: &mut Frame, menu: &mut MenuOverlay) {
    let screen = frame.area();
    let label_width = menu
        .entries
        .iter()
        .map(|entry| match entry {
            OverlayEntry::Item { label, .. } => label.width() as u16,
            OverlayEntry::Separator => 0,
        })
        .max()
        .unwrap_or(0);
    // Check-mark column, one space, label, plus the borders.
    let width = (label_width + 4).min(screen.width);
    let height = (menu.entries.len() as u16 + 2).min(screen.height);

    let x = menu.anchor.0.min(screen.width.saturating_sub(width));
    let y = menu.anchor.1.min(screen.height.saturating_sub(height));
    let area = Rect::new(x, y, width, height);
    menu.area = area;

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(menu.entries.len());
    for (index, entry) in menu.entries.iter().enumerate() {
        let line = match entry {
            OverlayEntry::Item { label, checked, .. } => {
                let mark = if *checked { '✓' } else { ' ' };
                let style = if index == menu.selected {
                    Style::default()
                        .fg(theme::COLOR_MENU_SELECTED)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::styled(format!("{} {}", mark, label), style)
            }
            OverlayEntry::Separator => Line::styled(
                "─".repeat(inner.width as usize),
                Style::default().fg(theme::COLOR_BORDER),
            ),
        };
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> MenuOverlay {
        let mut menu = MenuOverlay::new((0, 0));
        menu.add_item("Farmhouse");
        menu.add_item("Scandi");
        menu.add_separator();
        menu.add_item("Show All");
        menu
    }

    #[test]
    fn test_selection_skips_separators_and_wraps() {
        let mut menu = populated();
        assert_eq!(menu.selected_id(), Some(MenuItemId(0)));
        menu.select_next();
        assert_eq!(menu.selected_id(), Some(MenuItemId(1)));
        menu.select_next();
        assert_eq!(menu.selected_id(), Some(MenuItemId(2)), "separator skipped");
        menu.select_next();
        assert_eq!(menu.selected_id(), Some(MenuItemId(0)), "wraps to the top");
        menu.select_prev();
        assert_eq!(menu.selected_id(), Some(MenuItemId(2)));
    }

    #[test]
    fn test_set_checked_targets_one_entry() {
        let mut menu = populated();
        menu.set_checked(MenuItemId(1), true);
        let checked: Vec<bool> = menu
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                OverlayEntry::Item { checked, .. } => Some(*checked),
                OverlayEntry::Separator => None,
            })
            .collect();
        assert_eq!(checked, vec![false, true, false]);
    }

    #[test]
    fn test_hit_outside_area_misses() {
        let mut menu = populated();
        menu.area = Rect::new(10, 10, 14, 6);
        assert_eq!(menu.hit(0, 0), None);
        // First row inside the border is entry 0.
        assert_eq!(menu.hit(11, 11), Some(MenuItemId(0)));
        // Separator row is not activatable.
        assert_eq!(menu.hit(11, 13), None);
    }
}
