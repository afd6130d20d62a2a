//! Deck data: source locators, decoded slides and load outcomes.

use std::fmt;

/// Reference to a presentation file (filesystem path or URL).
///
/// Opaque to the state machine; only the fetch capability interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocator(String);

impl SourceLocator {
    /// Create a locator from a path or URL.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Locator as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the locator is an `http://` or `https://` URL.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceLocator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for SourceLocator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// One decoded slide.
///
/// Holds the text fragments extracted from the slide in reading order. An
/// image-only slide has no fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideRecord {
    fragments: Vec<String>,
}

impl SlideRecord {
    /// Create a slide from its text fragments.
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Slide without extractable text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text fragments in reading order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// First fragment, shown as the slide heading.
    pub fn heading(&self) -> Option<&str> {
        self.fragments.first().map(String::as_str)
    }

    /// Fragments after the heading.
    pub fn body(&self) -> &[String] {
        self.fragments.get(1..).unwrap_or_default()
    }

    /// Whether the decoder found no text on this slide.
    pub fn is_blank(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SlideRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Outcome of a single load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationResult {
    /// Deck fetched and decoded. May contain zero slides.
    Loaded {
        /// Slides in presentation order.
        slides: Vec<SlideRecord>,
    },
    /// Fetch or decode failed.
    Failed {
        /// Human-readable failure description. Never empty.
        message: String,
    },
}

impl PresentationResult {
    /// Build a failure, substituting a generic message for an empty one.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed { message: failure_message(message.into()) }
    }
}

/// Message shown when a failure carries no usable text.
pub(crate) const GENERIC_FAILURE: &str = "failed to load presentation";

/// `message`, or [`GENERIC_FAILURE`] when it is blank.
pub(crate) fn failure_message(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}
