//! Status bar: the host hint on the left, key reminders on the right.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme;
use crate::app::App;

const KEY_HINTS: &str = "space tool · u undo · q quit";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(KEY_HINTS.len() as u16 + 1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(app.scene.status().to_string())
            .style(Style::default().fg(theme::COLOR_STATUS)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(KEY_HINTS)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme::COLOR_STATUS)),
        chunks[1],
    );
}
