//! Viewer input events.
//!
//! This module defines [`ViewerEvent`], the complete set of inputs that drive
//! the [`crate::Viewer`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, pointer, resize) and system ticks.
//! - Load completions reported by the runtime.

use crate::{KeyInput, PresentationResult, SourceLocator};

/// On-screen control activated by a pointer click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// "Previous" button.
    Previous,
    /// "Next" button.
    Next,
    /// Index picker marker for the slide at this zero-based index.
    Marker(usize),
    /// "Close" button.
    Close,
}

/// Events processed by the Viewer state machine.
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Pointer click on a control.
    Click(ClickTarget),

    /// Periodic tick.
    Tick,

    /// Display resize (columns, rows).
    Resize(u16, u16),

    /// Owning context supplied a new deck to show.
    Open(SourceLocator),

    /// A load started by [`crate::ViewerAction::Load`] resolved.
    LoadFinished {
        /// Generation of the load that resolved.
        generation: u64,
        /// Load outcome.
        result: PresentationResult,
    },
}
