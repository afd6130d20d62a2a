//! Error types for package decoding.
//!
//! A `.pptx` file fails to decode at one of three layers: the zip container,
//! the XML inside a part, or the package structure (parts the document
//! references but does not contain).

use std::io;

use slidedeck_app::DecodeError;
use thiserror::Error;
use zip::result::ZipError;

/// Errors that can occur while reading a presentation package.
#[derive(Error, Debug)]
pub enum PptxError {
    /// Bytes are not a readable zip archive
    #[error("invalid package: {0}")]
    Zip(#[from] ZipError),

    /// Reading a part from the archive failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A part contains malformed XML
    #[error("malformed XML in {part}: {message}")]
    Xml {
        /// Part name inside the package
        part: String,
        /// Parser diagnostic
        message: String,
    },

    /// A required part is absent
    #[error("missing part: {0}")]
    MissingPart(String),

    /// A part decompresses beyond the size limit
    #[error("part {part} exceeds {limit} bytes")]
    PartTooLarge {
        /// Part name inside the package
        part: String,
        /// Size limit in bytes
        limit: u64,
    },
}

impl PptxError {
    pub(crate) fn xml(part: &str, message: impl ToString) -> Self {
        Self::Xml { part: part.to_string(), message: message.to_string() }
    }
}

impl From<PptxError> for DecodeError {
    fn from(err: PptxError) -> Self {
        DecodeError::new(err.to_string())
    }
}
