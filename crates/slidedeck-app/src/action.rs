//! Viewer side-effects and intents.
//!
//! This module defines the [`ViewerAction`] enum, which represents
//! instructions produced by the [`crate::Viewer`] state machine for the
//! runtime to execute.

use crate::SourceLocator;

/// Actions produced by the Viewer state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    /// Render the current view.
    Render,

    /// Ask the owning context to dispose of the viewer.
    Close,

    /// Start loading a deck.
    Load {
        /// Load generation; completions carrying any other value are stale.
        generation: u64,
        /// Where to fetch the deck from.
        locator: SourceLocator,
    },
}
