//! PowerPoint package decoding for the slide viewer.
//!
//! Turns the bytes of a `.pptx` file into ordered [`SlideRecord`]s holding the
//! text of each slide. Only text is extracted; layout, images and styling are
//! dropped.
//!
//! # Slide order
//!
//! Order follows the slide id list in `ppt/presentation.xml`, resolved through
//! `ppt/_rels/presentation.xml.rels`. When the relationships part is absent the
//! decoder falls back to numeric order of `ppt/slides/slideN.xml`.

mod error;
mod package;
mod xml;

pub use error::PptxError;
pub use package::{MAX_PART_SIZE, Package, resolve_target};
use slidedeck_app::{Decode, DecodeError, SlideRecord};

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";
const PRESENTATION_DIR: &str = "ppt";

/// [`Decode`] implementation for `.pptx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxDecoder;

impl PptxDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a package, keeping the typed error.
    pub fn decode_package(&self, bytes: &[u8]) -> Result<Vec<SlideRecord>, PptxError> {
        let mut package = Package::open(bytes)?;
        let parts = slide_parts(&mut package)?;
        tracing::debug!(slides = parts.len(), "Resolved slide parts");

        parts
            .iter()
            .map(|part| {
                let xml = package.require_part(part)?;
                let fragments = xml::text_fragments(part, &xml)?;
                Ok(SlideRecord::new(fragments))
            })
            .collect()
    }
}

impl Decode for PptxDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<SlideRecord>, DecodeError> {
        Ok(self.decode_package(bytes)?)
    }
}

/// Slide part names in presentation order.
fn slide_parts(package: &mut Package<'_>) -> Result<Vec<String>, PptxError> {
    let presentation = package.require_part(PRESENTATION_PART)?;
    let ids = xml::slide_ids(PRESENTATION_PART, &presentation)?;

    let Some(rels) = package.read_part(PRESENTATION_RELS)? else {
        tracing::debug!("No presentation relationships, using numeric slide order");
        return Ok(package.numbered_slide_parts());
    };
    let rels = xml::relationships(PRESENTATION_RELS, &rels)?;

    Ok(ids
        .iter()
        .filter_map(|id| match rels.get(id) {
            Some(target) => Some(resolve_target(PRESENTATION_DIR, target)),
            None => {
                tracing::warn!(%id, "Slide id has no relationship, skipping");
                None
            },
        })
        .collect())
}
