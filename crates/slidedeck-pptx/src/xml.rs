//! XML readers for the three parts the decoder touches.
//!
//! Matching is on local names so documents using non-standard namespace
//! prefixes still decode.

use std::collections::HashMap;

use quick_xml::{
    Reader,
    escape::resolve_predefined_entity,
    events::{BytesRef, BytesStart, Event},
};

use crate::PptxError;

/// Relationship ids of the slides listed in `presentation.xml`, in
/// presentation order.
pub fn slide_ids(part: &str, xml: &[u8]) -> Result<Vec<String>, PptxError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) if e.local_name().as_ref() == b"sldId" => {
                // `id` is the numeric slide id; the prefixed `r:id` is the relationship
                if let Some(rid) = prefixed_attr(part, &e, b"id")? {
                    ids.push(rid);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(PptxError::xml(part, e)),
            _ => {},
        }
        buf.clear();
    }
    Ok(ids)
}

/// Relationship id to target map from a `.rels` part.
///
/// External targets are skipped.
pub fn relationships(part: &str, xml: &[u8]) -> Result<HashMap<String, String>, PptxError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut rels = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) if e.local_name().as_ref() == b"Relationship" => {
                let id = attr(part, &e, b"Id")?;
                let target = attr(part, &e, b"Target")?;
                let external = attr(part, &e, b"TargetMode")?.is_some_and(|m| m == "External");
                if let (Some(id), Some(target), false) = (id, target, external) {
                    rels.insert(id, target);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(PptxError::xml(part, e)),
            _ => {},
        }
        buf.clear();
    }
    Ok(rels)
}

/// Paragraph text accumulated for the shape being read.
#[derive(Default)]
struct ShapeText {
    has_body: bool,
    paragraphs: Vec<String>,
    paragraph: Option<String>,
}

impl ShapeText {
    fn push_str(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }

    fn end_paragraph(&mut self) {
        if let Some(paragraph) = self.paragraph.take() {
            self.paragraphs.push(paragraph);
        }
    }

    fn into_fragment(mut self) -> Option<String> {
        self.end_paragraph();
        if !self.has_body {
            return None;
        }
        let text = self.paragraphs.join("\n");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Text of each shape with a text body, in document order.
///
/// One fragment per `sp`; its paragraphs are joined with `\n`. Shapes whose
/// text is empty or whitespace are skipped. Text outside shapes (tables,
/// charts, SmartArt) is ignored.
pub fn text_fragments(part: &str, xml: &[u8]) -> Result<Vec<String>, PptxError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut fragments = Vec::new();
    let mut shape: Option<ShapeText> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match (e.local_name().as_ref(), shape.as_mut()) {
                (b"sp", _) => shape = Some(ShapeText::default()),
                (b"txBody", Some(s)) => s.has_body = true,
                (b"p", Some(s)) if s.has_body => s.paragraph = Some(String::new()),
                (b"t", Some(_)) => in_text = true,
                _ => {},
            },
            Ok(Event::Empty(e)) => match (e.local_name().as_ref(), shape.as_mut()) {
                (b"txBody", Some(s)) => s.has_body = true,
                (b"p", Some(s)) if s.has_body => s.paragraphs.push(String::new()),
                (b"br", Some(s)) => s.push_str("\n"),
                _ => {},
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(s) = shape.as_mut() {
                        s.end_paragraph();
                    }
                },
                b"sp" => {
                    if let Some(text) = shape.take().and_then(ShapeText::into_fragment) {
                        fragments.push(text);
                    }
                },
                _ => {},
            },
            Ok(Event::Text(e)) if in_text => {
                let text = std::str::from_utf8(&e).map_err(|e| PptxError::xml(part, e))?;
                if let Some(s) = shape.as_mut() {
                    s.push_str(text);
                }
            },
            Ok(Event::CData(e)) if in_text => {
                let text = std::str::from_utf8(&e).map_err(|e| PptxError::xml(part, e))?;
                if let Some(s) = shape.as_mut() {
                    s.push_str(text);
                }
            },
            Ok(Event::GeneralRef(e)) if in_text => {
                let resolved = resolve_reference(part, &e)?;
                if let Some(s) = shape.as_mut() {
                    s.push_str(&resolved);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(PptxError::xml(part, e)),
            _ => {},
        }
        buf.clear();
    }
    Ok(fragments)
}

/// Expand a character or predefined entity reference.
fn resolve_reference(part: &str, reference: &BytesRef<'_>) -> Result<String, PptxError> {
    if let Some(ch) = reference.resolve_char_ref().map_err(|e| PptxError::xml(part, e))? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(|e| PptxError::xml(part, e))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| PptxError::xml(part, format!("unknown entity &{name};")))
}

/// Value of the unprefixed attribute `name`.
fn attr(part: &str, e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, PptxError> {
    find_attr(part, e, |key| key.prefix().is_none() && key.local_name().as_ref() == name)
}

/// Value of a namespace-prefixed attribute with local name `name`.
fn prefixed_attr(part: &str, e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, PptxError> {
    find_attr(part, e, |key| key.prefix().is_some() && key.local_name().as_ref() == name)
}

fn find_attr(
    part: &str,
    e: &BytesStart<'_>,
    matches: impl Fn(&quick_xml::name::QName<'_>) -> bool,
) -> Result<Option<String>, PptxError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| PptxError::xml(part, e))?;
        if matches(&attr.key) {
            let value = std::str::from_utf8(&attr.value).map_err(|e| PptxError::xml(part, e))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}
