//! Tag sidebar: every tag with its visibility marker, plus session info.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::app::App;
use crate::traits::{Host, Tag};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title("Tags");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for tag in app.scene.tags() {
        let visible = tag.is_visible();
        let marker = if visible { '●' } else { '○' };
        let style = if visible {
            Style::default()
        } else {
            Style::default().fg(theme::COLOR_HIDDEN)
        };
        lines.push(Line::styled(format!("{} {}", marker, tag.name()), style));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "tool: {}",
            if app.tool_active { "active" } else { "idle" }
        ),
        Style::default().fg(theme::COLOR_STATUS),
    ));
    lines.push(Line::styled(
        format!("undo steps: {}", app.scene.undo_depth()),
        Style::default().fg(theme::COLOR_STATUS),
    ));

    let skip = (app.sidebar_scroll as usize).min(lines.len().saturating_sub(1));
    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(skip)
        .take(inner.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible_lines), inner);
}
