use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::iso::ExtractError;

/// An XML event reduced to what the extractor looks at.
#[derive(Clone, Debug, PartialEq)]
pub enum XmlEvent {
    Start(Element),
    End(String),
    Text(String),
    Eof,
}

/// A start tag (or empty-element tag) by local name.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub href: Option<String>,
    pub is_empty: bool,
}

impl Element {
    fn from_start(start: &BytesStart, is_empty: bool) -> Self {
        let href = start
            .attributes()
            .filter_map(Result::ok)
            .find(|attribute| strip_tag(attribute.key) == b"href")
            .map(|attribute| match attribute.unescaped_value() {
                Ok(value) => String::from_utf8_lossy(&value).into_owned(),
                Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
            });

        Self {
            name: local_name(start.name()),
            href,
            is_empty,
        }
    }
}

/// A forward-only source of `XmlEvent`s.
pub trait Cursor {
    fn next_event(&mut self) -> Result<XmlEvent, ExtractError>;
}

/// Reads events from an XML byte stream.
///
/// The stream must hold exactly one root element. Text outside of it, a second root, or
/// reaching the end of the stream while an element is still open is an error.
pub struct ReaderCursor<B: BufRead> {
    reader: Reader<B>,
    xml_buffer: Vec<u8>,
    depth: usize,
    root_seen: bool,
}

impl<B: BufRead> ReaderCursor<B> {
    pub fn new(input: B) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.trim_text(true);

        Self {
            reader,
            xml_buffer: Vec::new(),
            depth: 0,
            root_seen: false,
        }
    }
}

impl<B: BufRead> Cursor for ReaderCursor<B> {
    fn next_event(&mut self) -> Result<XmlEvent, ExtractError> {
        loop {
            self.xml_buffer.clear();

            let event = match self.reader.read_event(&mut self.xml_buffer) {
                Ok(Event::Start(ref e)) => {
                    enter_element(self.depth, &mut self.root_seen, self.reader.buffer_position())?;
                    self.depth += 1;
                    XmlEvent::Start(Element::from_start(e, false))
                }
                Ok(Event::Empty(ref e)) => {
                    enter_element(self.depth, &mut self.root_seen, self.reader.buffer_position())?;
                    XmlEvent::Start(Element::from_start(e, true))
                }
                Ok(Event::End(ref e)) => {
                    self.depth = self.depth.saturating_sub(1);
                    XmlEvent::End(local_name(e.name()))
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescaped().map_err(|error| {
                        ExtractError::from_xml(error, self.reader.buffer_position())
                    })?;
                    if text.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    inside_root(self.depth, self.reader.buffer_position())?;
                    XmlEvent::Text(String::from_utf8_lossy(&text).into_owned())
                }
                Ok(Event::CData(ref e)) => {
                    inside_root(self.depth, self.reader.buffer_position())?;
                    XmlEvent::Text(String::from_utf8_lossy(e.escaped()).into_owned())
                }
                Ok(Event::Eof) => {
                    if self.depth > 0 {
                        return Err(malformed(
                            self.reader.buffer_position(),
                            format!("document ended with {} unclosed element(s)", self.depth),
                        ));
                    }
                    if !self.root_seen {
                        return Err(malformed(
                            self.reader.buffer_position(),
                            "document has no root element".into(),
                        ));
                    }
                    XmlEvent::Eof
                }
                Ok(_) => continue, // declarations, comments, processing instructions
                Err(e) => {
                    return Err(ExtractError::from_xml(e, self.reader.buffer_position()));
                }
            };

            return Ok(event);
        }
    }
}

/// A start tag at depth zero opens the root; there is only one.
fn enter_element(depth: usize, root_seen: &mut bool, position: usize) -> Result<(), ExtractError> {
    if depth == 0 {
        if *root_seen {
            return Err(malformed(position, "second root element".into()));
        }
        *root_seen = true;
    }
    Ok(())
}

fn inside_root(depth: usize, position: usize) -> Result<(), ExtractError> {
    if depth == 0 {
        return Err(malformed(position, "text outside of the root element".into()));
    }
    Ok(())
}

fn malformed(position: usize, message: String) -> ExtractError {
    ExtractError::Malformed { position, message }
}

/// Replays events captured from a stream. The end of the slice is the end of the scope.
pub struct SliceCursor<'e> {
    events: std::slice::Iter<'e, XmlEvent>,
}

impl<'e> SliceCursor<'e> {
    pub fn new(events: &'e [XmlEvent]) -> Self {
        Self {
            events: events.iter(),
        }
    }
}

impl<'e> Cursor for SliceCursor<'e> {
    fn next_event(&mut self) -> Result<XmlEvent, ExtractError> {
        Ok(self.events.next().cloned().unwrap_or(XmlEvent::Eof))
    }
}

/// The text payload of a leaf wrapper element and its link, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    pub text: String,
    pub href: Option<String>,
}

/// Walk the content of the element whose start tag was just read, up to and including
/// its end tag.
///
/// `visit` is called for every descendant start tag. It returns `true` if it consumed
/// the element through its end tag, `false` if the walk should descend into it.
/// Empty elements have no end tag and are never consumed.
pub fn walk<C, F>(cursor: &mut C, mut visit: F) -> Result<(), ExtractError>
where
    C: Cursor,
    F: FnMut(&mut C, &Element) -> Result<bool, ExtractError>,
{
    let mut depth = 0usize;

    loop {
        match cursor.next_event()? {
            XmlEvent::Start(element) => {
                let consumed = visit(cursor, &element)?;
                if !consumed && !element.is_empty {
                    depth += 1;
                }
            }
            XmlEvent::End(_) if depth == 0 => return Ok(()),
            XmlEvent::End(_) => depth -= 1,
            XmlEvent::Eof => return Ok(()),
            XmlEvent::Text(_) => {}
        }
    }
}

/// Consume the element whose start tag was just read.
pub fn skip<C: Cursor>(cursor: &mut C) -> Result<(), ExtractError> {
    walk(cursor, |_, _| Ok(false))
}

/// Consume the element whose start tag was just read and return its events,
/// without the closing end tag.
pub fn capture<C: Cursor>(cursor: &mut C) -> Result<Vec<XmlEvent>, ExtractError> {
    let mut events = Vec::new();
    let mut depth = 0usize;

    loop {
        let event = cursor.next_event()?;
        match &event {
            XmlEvent::Start(element) if !element.is_empty => depth += 1,
            XmlEvent::End(_) if depth == 0 => return Ok(events),
            XmlEvent::End(_) => depth -= 1,
            XmlEvent::Eof => return Ok(events),
            _ => {}
        }
        events.push(event);
    }
}

/// Consume the element whose start tag was just read and return its trimmed text content.
pub fn read_text<C: Cursor>(cursor: &mut C) -> Result<String, ExtractError> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match cursor.next_event()? {
            XmlEvent::Text(content) => text.push_str(&content),
            XmlEvent::Start(element) if !element.is_empty => depth += 1,
            XmlEvent::End(_) if depth > 0 => depth -= 1,
            XmlEvent::End(_) | XmlEvent::Eof => return Ok(text.trim().to_string()),
            XmlEvent::Start(_) => {}
        }
    }
}

/// Consume the element whose start tag was just read and return the text of the first
/// descendant wrapper element named in `wrappers`.
///
/// Text outside a wrapper is not part of the value.
pub fn read_leaf<C: Cursor>(
    cursor: &mut C,
    wrappers: &[&str],
) -> Result<Option<Leaf>, ExtractError> {
    let mut leaf = None;

    walk(cursor, |cursor, element| {
        if leaf.is_some() || !wrappers.contains(&element.name.as_str()) {
            return Ok(false);
        }

        let text = if element.is_empty {
            String::new()
        } else {
            read_text(cursor)?
        };

        leaf = Some(Leaf {
            text,
            href: element.href.clone(),
        });

        Ok(true)
    })?;

    Ok(leaf)
}

/// Strip the namespace prefix from a tag.
fn strip_tag(tag: &[u8]) -> &[u8] {
    match tag.iter().position(|&b| b == b':') {
        Some(colon) => &tag[colon + 1..],
        None => tag,
    }
}

fn local_name(tag: &[u8]) -> String {
    String::from_utf8_lossy(strip_tag(tag)).into_owned()
}
