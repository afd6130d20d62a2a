//! Slide rendering.
//!
//! Pure functions that map viewer data to declarative visual values. Nothing
//! here holds state or performs I/O; front-ends turn the returned values into
//! terminal widgets, DOM nodes or anything else.
//!
//! - [`render`]: one slide as a [`VisualTree`]
//! - [`navigation`]: the previous/next controls and the index picker

use std::fmt;

use crate::SlideRecord;

/// Caption under the slide number when a slide has no extractable text.
pub const FALLBACK_CAPTION: &str = "Slide Content";

/// 1-based position of a slide within its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    /// Zero-based slide index.
    pub index: usize,
    /// Number of slides in the deck.
    pub total: usize,
}

impl SlidePosition {
    /// 1-based slide number.
    pub fn number(&self) -> usize {
        self.index.saturating_add(1)
    }
}

impl fmt::Display for SlidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.number(), self.total)
    }
}

/// Content area of a rendered slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    /// Slide with text: the first fragment as heading, the rest as lines.
    Text {
        /// Heading text.
        heading: String,
        /// Body lines in order.
        lines: Vec<String>,
    },
    /// Slide without text: only its 1-based number.
    Fallback {
        /// Slide number as displayed.
        label: String,
        /// Caption under the number.
        caption: &'static str,
    },
}

/// Declarative rendering of one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualTree {
    /// Slide content.
    pub body: SlideBody,
    /// Footer position indicator.
    pub position: SlidePosition,
}

impl VisualTree {
    /// Whether this tree is the no-text fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self.body, SlideBody::Fallback { .. })
    }
}

impl fmt::Display for VisualTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            SlideBody::Text { heading, lines } => {
                writeln!(f, "# {heading}")?;
                for line in lines {
                    writeln!(f, "{line}")?;
                }
            },
            SlideBody::Fallback { label, caption } => {
                writeln!(f, "# {label}")?;
                writeln!(f, "{caption}")?;
            },
        }
        write!(f, "[{}]", self.position)
    }
}

/// Render a slide.
///
/// With at least one text fragment the first becomes the heading and the
/// remainder body lines. A missing slide or one without text renders the
/// fallback showing the slide's 1-based number. Never fails.
pub fn render(slide: Option<&SlideRecord>, index: usize, total: usize) -> VisualTree {
    let position = SlidePosition { index, total };

    let body = match slide.and_then(|s| s.heading().map(|heading| (heading, s.body()))) {
        Some((heading, body)) => {
            SlideBody::Text { heading: heading.to_string(), lines: body.to_vec() }
        },
        None => {
            SlideBody::Fallback { label: position.number().to_string(), caption: FALLBACK_CAPTION }
        },
    };

    VisualTree { body, position }
}

/// One entry of the index picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Zero-based slide index the marker jumps to.
    pub index: usize,
    /// Whether this is the displayed slide.
    pub current: bool,
}

/// Navigation controls for the displayed slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// "Previous" is clickable.
    pub previous_enabled: bool,
    /// "Next" is clickable.
    pub next_enabled: bool,
    /// One marker per slide.
    pub markers: Vec<Marker>,
}

/// Build navigation controls for slide `index` of `total`.
pub fn navigation(index: usize, total: usize) -> Navigation {
    Navigation {
        previous_enabled: index > 0,
        next_enabled: index.saturating_add(1) < total,
        markers: (0..total).map(|i| Marker { index: i, current: i == index }).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<SlideRecord> {
        (1..=n).map(|k| SlideRecord::new(vec![format!("Slide {k}")])).collect()
    }

    #[test]
    fn heading_only_slide() {
        let slides = deck(3);

        let tree = render(slides.get(1), 1, 3);

        assert_eq!(tree.body, SlideBody::Text { heading: "Slide 2".into(), lines: vec![] });
        assert_eq!(tree.position.to_string(), "2 / 3");
    }

    #[test]
    fn heading_and_body_lines() {
        let slide: SlideRecord = ["Q3 Results", "Revenue up", "Churn down"].into_iter().collect();

        let tree = render(Some(&slide), 0, 4);

        insta::assert_snapshot!(tree.to_string(), @r"
        # Q3 Results
        Revenue up
        Churn down
        [1 / 4]
        ");
    }

    #[test]
    fn blank_slide_falls_back_to_number() {
        let slide = SlideRecord::empty();

        let tree = render(Some(&slide), 0, 1);

        assert!(tree.is_fallback());
        assert_eq!(tree.body, SlideBody::Fallback { label: "1".into(), caption: FALLBACK_CAPTION });
    }

    #[test]
    fn missing_slide_falls_back_to_number() {
        let tree = render(None, 4, 2);

        insta::assert_snapshot!(tree.to_string(), @r"
        # 5
        Slide Content
        [5 / 2]
        ");
    }

    #[test]
    fn render_is_idempotent() {
        let slide: SlideRecord = ["A", "b"].into_iter().collect();

        assert_eq!(render(Some(&slide), 0, 1), render(Some(&slide), 0, 1));
    }

    #[test]
    fn navigation_disabled_at_bounds() {
        let first = navigation(0, 3);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);

        let last = navigation(2, 3);
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);

        let single = navigation(0, 1);
        assert!(!single.previous_enabled);
        assert!(!single.next_enabled);
    }

    #[test]
    fn one_marker_per_slide() {
        let nav = navigation(1, 3);

        let current: Vec<_> = nav.markers.iter().filter(|m| m.current).map(|m| m.index).collect();
        assert_eq!(nav.markers.len(), 3);
        assert_eq!(current, vec![1]);
    }
}
