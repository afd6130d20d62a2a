//! UI rendering
//!
//! Rendering functions that convert Viewer state into terminal output using
//! ratatui widgets. Rendering performs no I/O; besides drawing, each pass
//! returns a [`HitMap`] of the clickable controls it placed.

mod header;
mod hint;
mod navigation;
mod slide;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::Span,
};
use slidedeck_app::{ClickTarget, Viewer};

/// Screen regions of clickable controls from the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    /// Register `target` as occupying `area`.
    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Control under the cell at (`column`, `row`), if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.regions.iter().find(|(area, _)| area.contains(position)).map(|(_, target)| *target)
    }

    /// Area registered for `target`.
    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.regions.iter().find(|(_, t)| *t == target).map(|(area, _)| *area)
    }

    /// Number of registered controls.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no controls are registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, viewer: &Viewer) -> HitMap {
    const HEADER_HEIGHT: u16 = 1;
    const SLIDE_MIN_HEIGHT: u16 = 3;
    const NAVIGATION_HEIGHT: u16 = 1;
    const HINT_HEIGHT: u16 = 1;

    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(SLIDE_MIN_HEIGHT),
            Constraint::Length(NAVIGATION_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, slide_area, navigation_area, hint_area] = chunks.as_ref() else {
        return hits;
    };

    header::render(frame, viewer, *header_area, &mut hits);
    slide::render(frame, viewer, *slide_area, &mut hits);
    if let Some(nav) = viewer.navigation() {
        navigation::render(frame, &nav, *navigation_area, &mut hits);
        hint::render(frame, *hint_area);
    }

    hits
}

/// Display width of `text` in terminal cells.
fn width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}
