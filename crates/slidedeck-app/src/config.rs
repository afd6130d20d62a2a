//! Viewer configuration.

/// Title shown when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Presentation";

/// Display options supplied by the owning context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Title shown in the header. Display only.
    pub title: String,
}

impl ViewerConfig {
    /// Configuration with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
