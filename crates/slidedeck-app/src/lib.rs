//! Application layer for slidedeck
//!
//! Pure state machine, loader and renderer for paging through a slide deck,
//! plus a generic runtime that drives them from any front-end.
//!
//! # Components
//!
//! - [`Viewer`]: view state machine (load cycle, slide navigation, close)
//! - [`Loader`]: fetch + decode pipeline over injected [`Fetch`] and
//!   [`Decode`] capabilities
//! - [`render`]: pure slide renderer producing a [`VisualTree`]
//! - [`Driver`]: trait for platform-specific input and display
//! - [`Runtime`]: generic event loop using a Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod config;
mod driver;
mod event;
mod input;
mod loader;
pub mod render;
mod runtime;
mod slide;
mod state;
mod viewer;

pub use action::ViewerAction;
pub use config::{DEFAULT_TITLE, ViewerConfig};
pub use driver::Driver;
pub use event::{ClickTarget, ViewerEvent};
pub use input::{KeyBinding, KeyInput, ViewerCommand};
pub use loader::{Decode, DecodeError, Fetch, FetchError, LoadError, Loader, PendingLoad};
pub use render::{Marker, Navigation, SlideBody, SlidePosition, VisualTree};
pub use runtime::Runtime;
pub use slide::{PresentationResult, SlideRecord, SourceLocator};
pub use state::{ViewState, ViewStatus};
pub use viewer::Viewer;
