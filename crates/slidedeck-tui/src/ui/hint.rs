//! Keyboard hint line

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

const HINT: &str = "Use ← → arrow keys or Space to navigate • Press Esc to close";

/// Render the hint line.
pub fn render(frame: &mut Frame, area: Rect) {
    let hint =
        Paragraph::new(Line::from(HINT).centered()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}
