//! Observable view state.
//!
//! [`ViewState`] is the "View Model" of the viewer: the load status, the
//! current slide index and the slide count. Front-ends read it to decide which
//! screen to draw; only [`crate::Viewer`] mutates it.

use crate::slide::failure_message;

/// Load status of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Load in progress.
    Loading,
    /// Deck loaded; navigation enabled.
    Ready,
    /// Load failed; terminal until a new load starts.
    Error,
}

/// View state of the slideshow.
///
/// When `status` is [`ViewStatus::Ready`] and `slide_count > 0`,
/// `current_index < slide_count` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    status: ViewStatus,
    current_index: usize,
    slide_count: usize,
    error_message: Option<String>,
}

impl ViewState {
    /// State while a load is in flight.
    pub fn loading() -> Self {
        Self { status: ViewStatus::Loading, current_index: 0, slide_count: 0, error_message: None }
    }

    /// State after a successful load of `slide_count` slides.
    pub fn ready(slide_count: usize) -> Self {
        Self { status: ViewStatus::Ready, current_index: 0, slide_count, error_message: None }
    }

    /// State after a failed load. A blank message is replaced by a generic one.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ViewStatus::Error,
            current_index: 0,
            slide_count: 0,
            error_message: Some(failure_message(message.into())),
        }
    }

    /// Current load status.
    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Zero-based index of the displayed slide.
    ///
    /// Only meaningful in [`ViewStatus::Ready`] with at least one slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides in the loaded deck.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Failure description. `None` unless status is [`ViewStatus::Error`].
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the displayed slide is the first one.
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the displayed slide is the last one (or the deck is empty).
    pub fn at_last(&self) -> bool {
        self.current_index.saturating_add(1) >= self.slide_count
    }

    /// Move to `index` if it is in bounds. Returns whether the index changed.
    pub(crate) fn set_index(&mut self, index: usize) -> bool {
        if self.status != ViewStatus::Ready || index >= self.slide_count {
            return false;
        }
        let changed = self.current_index != index;
        self.current_index = index;
        changed
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::loading()
    }
}
