//! Scene viewport: visible entities drawn as labeled boxes.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::app::App;
use crate::scene::Entity;
use crate::traits::Tag;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title("Viewport");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Pointer events map back through this rectangle.
    app.viewport = inner;

    let group = app.tool.current();
    for entity in app.scene.entities() {
        if !entity.is_visible() {
            continue;
        }
        let Some(rect) = entity_rect(entity, inner) else {
            continue;
        };
        let highlighted = group
            .map(|g| g.contains_tag(&entity.tag().name()))
            .unwrap_or(false);
        let color = if highlighted {
            theme::COLOR_GROUP
        } else {
            theme::COLOR_ENTITY
        };
        let entity_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(entity.label.clone());
        frame.render_widget(entity_block, rect);
    }
}

/// Translate an entity into screen cells, clipped to the viewport. Boxes
/// that clip below drawable size disappear instead of overflowing.
fn entity_rect(entity: &Entity, inner: Rect) -> Option<Rect> {
    let left = (inner.x as i32 + entity.x as i32).max(inner.x as i32);
    let top = (inner.y as i32 + entity.y as i32).max(inner.y as i32);
    let right = (inner.x as i32 + entity.x as i32 + entity.width as i32)
        .min(inner.x as i32 + inner.width as i32);
    let bottom = (inner.y as i32 + entity.y as i32 + entity.height as i32)
        .min(inner.y as i32 + inner.height as i32);
    if right - left < 2 || bottom - top < 2 {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Draw the hover tooltip next to the pointer.
pub fn render_tooltip(frame: &mut Frame, text: &str, pointer: (u16, u16)) {
    let screen = frame.area();
    let width = (text.width() as u16 + 2).min(screen.width);
    let x = (pointer.0 + 1).min(screen.width.saturating_sub(width));
    let y = (pointer.1 + 1).min(screen.height.saturating_sub(1));
    let area = Rect::new(x, y, width, 1);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!(" {} ", text)).style(
            Style::default()
                .fg(theme::COLOR_TOOLTIP)
                .add_modifier(Modifier::REVERSED),
        ),
        area,
    );
}
