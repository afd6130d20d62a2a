//! Navigation bar
//!
//! Previous and next buttons at the edges, an index picker in between. The
//! picker draws one marker per slide, two columns apart; when they do not all
//! fit, a window around the current slide is shown.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use slidedeck_app::{ClickTarget, Navigation};

use super::{HitMap, width};

const PREVIOUS_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";
const CURRENT_MARKER: &str = "●";
const OTHER_MARKER: &str = "○";
const MARKER_SPACING: u16 = 2;
const BUTTON_GAP: u16 = 1;

/// Render the navigation bar.
pub fn render(frame: &mut Frame, nav: &Navigation, area: Rect, hits: &mut HitMap) {
    let previous_width = width(PREVIOUS_LABEL).min(area.width);
    let previous_area = Rect::new(area.x, area.y, previous_width, area.height);
    render_button(frame, PREVIOUS_LABEL, nav.previous_enabled, previous_area);
    if nav.previous_enabled {
        hits.push(previous_area, ClickTarget::Previous);
    }

    let next_width = width(NEXT_LABEL).min(area.width);
    let next_area =
        Rect::new(area.right().saturating_sub(next_width), area.y, next_width, area.height);
    render_button(frame, NEXT_LABEL, nav.next_enabled, next_area);
    if nav.next_enabled {
        hits.push(next_area, ClickTarget::Next);
    }

    let lane_x = previous_area.right() + BUTTON_GAP;
    let lane_width = next_area.x.saturating_sub(BUTTON_GAP).saturating_sub(lane_x);
    render_markers(frame, nav, Rect::new(lane_x, area.y, lane_width, area.height), hits);
}

fn render_button(frame: &mut Frame, label: &str, enabled: bool, area: Rect) {
    let style = if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(label.to_string()).style(style), area);
}

fn render_markers(frame: &mut Frame, nav: &Navigation, lane: Rect, hits: &mut HitMap) {
    let capacity = usize::from(lane.width.saturating_add(1) / MARKER_SPACING);
    let shown = nav.markers.len().min(capacity);
    if shown == 0 {
        return;
    }

    let current = nav.markers.iter().position(|m| m.current).unwrap_or(0);
    let first = current.saturating_sub(shown / 2).min(nav.markers.len() - shown);
    let visible = &nav.markers[first..first + shown];

    let used = (shown as u16) * MARKER_SPACING - 1;
    let start_x = lane.x + (lane.width - used) / 2;

    let mut spans = Vec::with_capacity(shown * 2);
    for (slot, marker) in visible.iter().enumerate() {
        if slot > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(if marker.current {
            Span::styled(CURRENT_MARKER, Style::default().fg(Color::Cyan))
        } else {
            Span::styled(OTHER_MARKER, Style::default().fg(Color::Gray))
        });

        let x = start_x + slot as u16 * MARKER_SPACING;
        hits.push(Rect::new(x, lane.y, 1, lane.height), ClickTarget::Marker(marker.index));
    }

    let lane_area = Rect::new(start_x, lane.y, used, lane.height);
    frame.render_widget(Paragraph::new(Line::from(spans)), lane_area);
}
