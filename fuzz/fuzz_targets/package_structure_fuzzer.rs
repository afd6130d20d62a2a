//! Fuzz target for well-formed zips with hostile package structure
//!
//! Random bytes rarely get past the zip reader. This target builds valid
//! archives and fuzzes what is inside them.
//!
//! # Strategy
//!
//! - Slide lists referencing missing, duplicate or external relationships
//! - Relationship targets with `..`, absolute paths and empty segments
//! - Slide XML assembled from arbitrary text, entities and broken markup
//! - Missing relationships part (numeric fallback)
//!
//! # Invariants
//!
//! - Decoding never panics
//! - A successful decode yields at most one slide per listed id, or per
//!   numbered slide part when relationships are absent
//! - No fragment is empty or whitespace-only

#![no_main]

use std::io::{Cursor, Write};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slidedeck_pptx::PptxDecoder;
use zip::{ZipWriter, write::SimpleFileOptions};

#[derive(Debug, Arbitrary)]
struct FuzzPackage {
    slide_ids: Vec<u8>,
    relationships: Option<Vec<(u8, Target)>>,
    slides: Vec<(u8, Vec<Chunk>)>,
}

#[derive(Debug, Arbitrary)]
enum Target {
    Relative(u8),
    Absolute(u8),
    Parent(u8),
    Raw(String),
}

#[derive(Debug, Arbitrary)]
enum Chunk {
    Shape(Vec<String>),
    Entity(u8),
    LineBreak,
    Raw(String),
}

const ENTITIES: &[&str] =
    &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#65;", "&#x2022;", "&bogus;"];

impl Target {
    fn render(&self) -> String {
        match self {
            Self::Relative(n) => format!("slides/slide{n}.xml"),
            Self::Absolute(n) => format!("/ppt/slides/slide{n}.xml"),
            Self::Parent(n) => format!("../ppt/slides/slide{n}.xml"),
            Self::Raw(s) => xml_attr(s),
        }
    }
}

fn xml_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

fn slide_xml(chunks: &[Chunk]) -> String {
    let mut tree = String::new();
    for chunk in chunks {
        match chunk {
            Chunk::Shape(paragraphs) => {
                tree.push_str("<p:sp><p:txBody>");
                for p in paragraphs {
                    tree.push_str("<a:p><a:r><a:t>");
                    tree.push_str(&xml_attr(p));
                    tree.push_str("</a:t></a:r></a:p>");
                }
                tree.push_str("</p:txBody></p:sp>");
            },
            Chunk::Entity(i) => {
                let entity = ENTITIES[*i as usize % ENTITIES.len()];
                tree.push_str(&format!("<p:sp><p:txBody><a:p><a:r><a:t>{entity}</a:t></a:r></a:p></p:txBody></p:sp>"));
            },
            Chunk::LineBreak => tree.push_str("<p:sp><p:txBody><a:p><a:br/></a:p></p:txBody></p:sp>"),
            Chunk::Raw(s) => tree.push_str(s),
        }
    }
    format!(r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>{tree}</p:spTree></p:cSld></p:sld>"#)
}

fn build(package: &FuzzPackage) -> Option<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    let ids: String = package
        .slide_ids
        .iter()
        .map(|rid| format!(r#"<p:sldId id="256" r:id="rId{rid}"/>"#))
        .collect();
    writer.start_file("ppt/presentation.xml", SimpleFileOptions::default()).ok()?;
    write!(writer, r#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst>{ids}</p:sldIdLst></p:presentation>"#).ok()?;

    if let Some(rels) = &package.relationships {
        let rels: String = rels
            .iter()
            .map(|(id, target)| format!(r#"<Relationship Id="rId{id}" Target="{}"/>"#, target.render()))
            .collect();
        writer.start_file("ppt/_rels/presentation.xml.rels", SimpleFileOptions::default()).ok()?;
        write!(writer, "<Relationships>{rels}</Relationships>").ok()?;
    }

    let mut seen = std::collections::HashSet::new();
    for (n, chunks) in &package.slides {
        if seen.insert(*n) {
            let name = format!("ppt/slides/slide{n}.xml");
            writer.start_file(name, SimpleFileOptions::default()).ok()?;
            writer.write_all(slide_xml(chunks).as_bytes()).ok()?;
        }
    }

    Some(writer.finish().ok()?.into_inner())
}

fuzz_target!(|package: FuzzPackage| {
    let Some(bytes) = build(&package) else {
        return;
    };

    let Ok(slides) = PptxDecoder::new().decode_package(&bytes) else {
        return;
    };

    let bound = if package.relationships.is_some() {
        package.slide_ids.len()
    } else {
        package.slides.len()
    };
    assert!(slides.len() <= bound, "{} slides from {bound} entries", slides.len());

    for slide in &slides {
        for fragment in slide.fragments() {
            assert!(!fragment.trim().is_empty(), "blank fragment in {slide:?}");
        }
    }
});
