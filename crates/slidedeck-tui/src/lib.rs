//! Terminal slide viewer.
//!
//! A thin shell over [`slidedeck_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`slidedeck_app::Runtime`].
//!
//! This crate handles terminal rendering, pointer hit-testing and fetching
//! deck bytes from disk or HTTP.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod fetch;
pub mod terminal;
pub mod ui;

pub use fetch::SourceFetcher;
pub use slidedeck_app::{Driver, KeyInput, Runtime, Viewer, ViewerEvent};
pub use terminal::{TerminalDriver, TerminalError};
pub use ui::HitMap;
