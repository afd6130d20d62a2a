//! Decoding of complete packages built in memory.

use std::io::{Cursor, Write};

use proptest::prelude::*;
use slidedeck_app::{Decode, SlideRecord};
use slidedeck_pptx::{PptxDecoder, PptxError};
use zip::{ZipWriter, write::SimpleFileOptions};

/// Builder for minimal `.pptx` packages.
#[derive(Default)]
struct PackageBuilder {
    parts: Vec<(String, String)>,
}

impl PackageBuilder {
    fn part(mut self, name: &str, xml: impl Into<String>) -> Self {
        self.parts.push((name.to_string(), xml.into()));
        self
    }

    /// Presentation listing `slides` by relationship id, in order.
    fn presentation(self, rids: &[&str]) -> Self {
        let ids: String = rids
            .iter()
            .enumerate()
            .map(|(i, rid)| format!(r#"<p:sldId id="{}" r:id="{rid}"/>"#, 256 + i))
            .collect();
        self.part(
            "ppt/presentation.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><p:sldIdLst>{ids}</p:sldIdLst></p:presentation>"#
            ),
        )
    }

    fn rels(self, entries: &[(&str, &str)]) -> Self {
        let rels: String = entries
            .iter()
            .map(|(id, target)| {
                format!(
                    r#"<Relationship Id="{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="{target}"/>"#
                )
            })
            .collect();
        self.part(
            "ppt/_rels/presentation.xml.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
            ),
        )
    }

    /// Slide part whose shapes each hold the given paragraphs.
    fn slide(self, name: &str, shapes: &[&[&str]]) -> Self {
        let tree: String = shapes
            .iter()
            .map(|paragraphs| {
                let body: String = paragraphs
                    .iter()
                    .map(|p| format!("<a:p><a:r><a:rPr lang=\"en-US\"/><a:t>{p}</a:t></a:r></a:p>"))
                    .collect();
                format!("<p:sp><p:nvSpPr/><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{body}</p:txBody></p:sp>")
            })
            .collect();
        self.part(
            name,
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{tree}</p:spTree></p:cSld></p:sld>"#
            ),
        )
    }

    fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, xml) in self.parts {
            writer.start_file(name, SimpleFileOptions::default()).unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}

fn fragments(slides: &[SlideRecord]) -> Vec<Vec<&str>> {
    slides.iter().map(|s| s.fragments().iter().map(String::as_str).collect()).collect()
}

#[test]
fn slide_order_follows_presentation_list() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId3", "rId2"])
        .rels(&[("rId2", "slides/slide1.xml"), ("rId3", "slides/slide2.xml")])
        .slide("ppt/slides/slide1.xml", &[&["Listed second"]])
        .slide("ppt/slides/slide2.xml", &[&["Listed first"]])
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(fragments(&slides), vec![vec!["Listed first"], vec!["Listed second"]]);
}

#[test]
fn shapes_become_fragments() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId2"])
        .rels(&[("rId2", "slides/slide1.xml")])
        .slide("ppt/slides/slide1.xml", &[&["Q3 Results"], &["Revenue up", "Churn down"]])
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].heading(), Some("Q3 Results"));
    assert_eq!(fragments(&slides), vec![vec!["Q3 Results", "Revenue up\nChurn down"]]);
}

#[test]
fn entities_in_text_are_resolved() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId2"])
        .rels(&[("rId2", "slides/slide1.xml")])
        .slide("ppt/slides/slide1.xml", &[&["Research &amp; Development"]])
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(slides[0].heading(), Some("Research & Development"));
}

#[test]
fn picture_only_slide_decodes_blank() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId2"])
        .rels(&[("rId2", "slides/slide1.xml")])
        .part(
            "ppt/slides/slide1.xml",
            r#"<p:sld xmlns:p="p"><p:cSld><p:spTree><p:pic><p:nvPicPr/></p:pic></p:spTree></p:cSld></p:sld>"#,
        )
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(slides.len(), 1);
    assert!(slides[0].is_blank());
}

#[test]
fn absolute_relationship_targets_resolve() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId2"])
        .rels(&[("rId2", "/ppt/slides/slide7.xml")])
        .slide("ppt/slides/slide7.xml", &[&["Seven"]])
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(fragments(&slides), vec![vec!["Seven"]]);
}

#[test]
fn missing_relationships_fall_back_to_numeric_order() {
    let bytes = PackageBuilder::default()
        .presentation(&[])
        .slide("ppt/slides/slide10.xml", &[&["Ten"]])
        .slide("ppt/slides/slide2.xml", &[&["Two"]])
        .slide("ppt/slides/slide1.xml", &[&["One"]])
        .build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert_eq!(fragments(&slides), vec![vec!["One"], vec!["Two"], vec!["Ten"]]);
}

#[test]
fn empty_presentation_decodes_to_no_slides() {
    let bytes = PackageBuilder::default().presentation(&[]).rels(&[]).build();

    let slides = PptxDecoder::new().decode(&bytes).unwrap();

    assert!(slides.is_empty());
}

#[test]
fn not_a_zip_is_rejected() {
    let err = PptxDecoder::new().decode_package(b"definitely not a presentation").unwrap_err();

    assert!(matches!(err, PptxError::Zip(_)), "unexpected error: {err}");
}

#[test]
fn missing_presentation_part_is_rejected() {
    let bytes = PackageBuilder::default().slide("ppt/slides/slide1.xml", &[&["Orphan"]]).build();

    let err = PptxDecoder::new().decode_package(&bytes).unwrap_err();

    assert!(matches!(err, PptxError::MissingPart(ref part) if part == "ppt/presentation.xml"));
}

#[test]
fn dangling_slide_target_is_rejected() {
    let bytes = PackageBuilder::default()
        .presentation(&["rId2"])
        .rels(&[("rId2", "slides/slide1.xml")])
        .build();

    let err = PptxDecoder::new().decode_package(&bytes).unwrap_err();

    assert!(matches!(err, PptxError::MissingPart(ref part) if part == "ppt/slides/slide1.xml"));
}

#[test]
fn decode_error_carries_diagnostic() {
    let err = PptxDecoder::new().decode(b"PK\x03\x04 truncated").unwrap_err();

    assert!(err.message().starts_with("invalid package"), "unexpected message: {err}");
}

proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = PptxDecoder::new().decode(&bytes);
    }

    #[test]
    fn prop_slide_count_matches_listing(count in 0usize..12) {
        let rids: Vec<String> = (0..count).map(|i| format!("rId{}", i + 2)).collect();
        let targets: Vec<String> =
            (0..count).map(|i| format!("slides/slide{}.xml", i + 1)).collect();
        let rid_refs: Vec<&str> = rids.iter().map(String::as_str).collect();
        let rels: Vec<(&str, &str)> =
            rids.iter().zip(&targets).map(|(r, t)| (r.as_str(), t.as_str())).collect();

        let mut builder = PackageBuilder::default().presentation(&rid_refs).rels(&rels);
        for i in 1..=count {
            let title = format!("Slide {i}");
            builder = builder.slide(&format!("ppt/slides/slide{i}.xml"), &[&[title.as_str()]]);
        }

        let slides = PptxDecoder::new().decode(&builder.build()).unwrap();

        prop_assert_eq!(slides.len(), count);
        for (i, slide) in slides.iter().enumerate() {
            let expected = format!("Slide {}", i + 1);
            prop_assert_eq!(slide.heading(), Some(expected.as_str()));
        }
    }
}
