//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the viewer runtime from specific display
//! and input implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use crate::{Viewer, ViewerEvent};

/// Abstracts input and display for the viewer runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for input, ratatui for rendering
/// - **Tests**: scripted events and recorded renders
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` if the wait ended without an event (e.g. poll timeout).
    fn poll_event(
        &mut self,
    ) -> impl Future<Output = Result<Option<ViewerEvent>, Self::Error>> + Send;

    /// Render the viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, viewer: &Viewer) -> Result<(), Self::Error>;

    /// Release display resources.
    fn stop(&mut self);
}
