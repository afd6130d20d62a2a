//! Header bar
//!
//! Presentation title on the left, close control on the right.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};
use slidedeck_app::{ClickTarget, Viewer};

use super::{HitMap, width};

const CLOSE_LABEL: &str = "Close (Esc)";
const PADDING: u16 = 1;

/// Render the header bar.
pub fn render(frame: &mut Frame, viewer: &Viewer, area: Rect, hits: &mut HitMap) {
    let bar = Style::default().bg(Color::DarkGray).fg(Color::White);

    let title = Paragraph::new(Span::styled(
        format!(" {}", viewer.title()),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .style(bar);
    frame.render_widget(title, area);

    let close_width = width(CLOSE_LABEL).min(area.width);
    let close_x = area.right().saturating_sub(close_width + PADDING).max(area.x);
    let close_area = Rect::new(close_x, area.y, close_width, area.height);

    frame.render_widget(Paragraph::new(CLOSE_LABEL).style(bar.fg(Color::Yellow)), close_area);
    hits.push(close_area, ClickTarget::Close);
}
