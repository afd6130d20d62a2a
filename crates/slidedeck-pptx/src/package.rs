//! Zip container access.
//!
//! Parts are addressed by their archive name without a leading slash, e.g.
//! `ppt/slides/slide1.xml`. Reads are capped so a hostile archive cannot
//! inflate a single part without bound.

use std::io::{Cursor, Read};

use zip::{ZipArchive, result::ZipError};

use crate::PptxError;

/// Largest part the decoder will inflate.
pub const MAX_PART_SIZE: u64 = 32 * 1024 * 1024;

const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// An opened `.pptx` package.
pub struct Package<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> Package<'a> {
    /// Open a package over in-memory bytes.
    pub fn open(bytes: &'a [u8]) -> Result<Self, PptxError> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { archive })
    }

    /// Read a part, or `None` if the package has no part by that name.
    pub fn read_part(&mut self, name: &str) -> Result<Option<Vec<u8>>, PptxError> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let too_large = || PptxError::PartTooLarge { part: name.to_string(), limit: MAX_PART_SIZE };
        if file.size() > MAX_PART_SIZE {
            return Err(too_large());
        }

        let mut buf = Vec::with_capacity(file.size() as usize);
        Read::take(&mut file, MAX_PART_SIZE + 1).read_to_end(&mut buf)?;
        if buf.len() as u64 > MAX_PART_SIZE {
            return Err(too_large());
        }
        Ok(Some(buf))
    }

    /// Read a part the package must contain.
    pub fn require_part(&mut self, name: &str) -> Result<Vec<u8>, PptxError> {
        self.read_part(name)?.ok_or_else(|| PptxError::MissingPart(name.to_string()))
    }

    /// Slide parts named `ppt/slides/slideN.xml`, ordered by `N`.
    pub fn numbered_slide_parts(&self) -> Vec<String> {
        let mut numbered: Vec<(u32, &str)> = self
            .archive
            .file_names()
            .filter_map(|name| {
                let number = name.strip_prefix(SLIDE_PREFIX)?.strip_suffix(".xml")?;
                Some((number.parse().ok()?, name))
            })
            .collect();
        numbered.sort_unstable();
        numbered.into_iter().map(|(_, name)| name.to_string()).collect()
    }
}

/// Resolve a relationship target against the directory of its source part.
///
/// `base_dir` has no trailing slash (`ppt` for `ppt/presentation.xml`).
/// Absolute targets are taken from the package root.
pub fn resolve_target(base_dir: &str, target: &str) -> String {
    let (mut segments, relative) = match target.strip_prefix('/') {
        Some(absolute) => (Vec::new(), absolute),
        None => (base_dir.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>(), target),
    };

    for segment in relative.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    segments.join("/")
}
