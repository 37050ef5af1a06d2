//! Tree Decoder
//!
//! Drives a quick-xml pull reader and builds an [`Element`] tree from it.
//! The reader's byte position is the decoder's cursor: every opening tag
//! gets the offset of its `<`, worked out from the position just past the
//! tag and the tag's raw length. Whitespace between tags arrives as
//! separate text tokens and never shifts a recorded offset.

use super::events::{StartTag, Token};
use crate::core::names::QName;
use crate::dom::{Attribute, Element};
use crate::error::{Error, Result};
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufRead, BufReader, Read};
use std::str;

/// Bytes around a start tag's content: `<` and `>`
const START_DELIMITERS: usize = 2;

/// Bytes around a self-closing tag's content: `<`, `/` and `>`
const EMPTY_DELIMITERS: usize = 3;

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Streaming decoder producing element trees
pub struct Decoder<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Bytes the reader skips without counting, a leading BOM
    base: u64,
}

impl<R: BufRead> Decoder<R> {
    /// Create a decoder over a buffered byte source
    pub fn new(mut source: R) -> Self {
        let base = match source.fill_buf() {
            Ok(head) if head.starts_with(BOM) => BOM.len() as u64,
            _ => 0,
        };

        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;
        config.expand_empty_elements = false;

        Decoder {
            reader,
            buf: Vec::new(),
            base,
        }
    }

    /// Bytes consumed from the source so far
    #[inline]
    pub fn position(&self) -> u64 {
        self.base + self.reader.buffer_position()
    }

    /// Read the next token, skipping comments, processing instructions,
    /// XML declarations and DOCTYPE.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.buf.clear();
            let event = self.reader.read_event_into(&mut self.buf)?;
            let end = self.base + self.reader.buffer_position();

            match event {
                Event::Start(start) => return Ok(Token::Start(start_tag(&start, end, START_DELIMITERS)?)),
                Event::Empty(start) => return Ok(Token::Empty(start_tag(&start, end, EMPTY_DELIMITERS)?)),
                Event::End(tag) => {
                    let name = QName::new(str::from_utf8(tag.name().as_ref())?);
                    return Ok(Token::End(name));
                }
                Event::Text(text) => return Ok(Token::Text(text.unescape()?.into_owned())),
                Event::CData(cdata) => return Ok(Token::Text(str::from_utf8(&cdata)?.to_owned())),
                Event::Eof => return Ok(Token::Eof),
                _ => {}
            }
        }
    }

    /// Decode the next element on the stream into `element`.
    ///
    /// The opening tag's local name must match `element`'s, otherwise
    /// [`Error::UnexpectedElement`] is returned. Attributes already set on
    /// `element` win over stream attributes with the same local name, and
    /// an `xmlns` attribute is dropped when `element` carries a namespace.
    /// Descendants take their attributes exactly as seen on the stream.
    pub fn decode(&mut self, element: &mut Element) -> Result<()> {
        let (tag, empty) = loop {
            match self.next_token()? {
                Token::Start(tag) => break (tag, false),
                Token::Empty(tag) => break (tag, true),
                Token::Text(_) => continue,
                Token::End(name) => {
                    return Err(Error::UnexpectedEndTag {
                        expected: element.qualified_name(),
                        found: name.qualified(),
                    })
                }
                Token::Eof => return Err(Error::UnexpectedEof(element.qualified_name())),
            }
        };

        if tag.name.local() != element.local_name() {
            return Err(Error::UnexpectedElement(tag.name.qualified()));
        }

        element.set_offset(tag.offset);
        merge_attributes(element, tag.attributes);
        trace!("<{}> at offset {}", tag.name, tag.offset);

        if empty {
            return Ok(());
        }
        self.decode_body(element, &tag.name)
    }

    /// Decode everything up to and including the closing tag for `open`
    fn decode_body(&mut self, element: &mut Element, open: &QName) -> Result<()> {
        let mut text = String::new();

        loop {
            match self.next_token()? {
                Token::Start(tag) => {
                    text.clear();
                    let open = tag.name.clone();
                    let mut child = open_child(tag);
                    self.decode_body(&mut child, &open)?;
                    element.push_child(child);
                }
                Token::Empty(tag) => {
                    text.clear();
                    let child = open_child(tag);
                    element.push_child(child);
                }
                Token::Text(segment) => text.push_str(&segment),
                Token::End(name) => {
                    if name != *open {
                        return Err(Error::UnexpectedEndTag {
                            expected: open.qualified(),
                            found: name.qualified(),
                        });
                    }
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        element.set_content(trimmed);
                    }
                    return Ok(());
                }
                Token::Eof => return Err(Error::UnexpectedEof(element.qualified_name())),
            }
        }
    }
}

impl<R: Read> Decoder<BufReader<R>> {
    /// Create a decoder over an unbuffered byte source
    pub fn from_read(source: R) -> Self {
        Decoder::new(BufReader::new(source))
    }
}

impl Element {
    /// Decode this element from a byte stream.
    ///
    /// See [`Decoder::decode`] for how the opening tag is matched and how
    /// attributes already present are treated.
    pub fn decode_from<R: Read>(&mut self, source: R) -> Result<()> {
        Decoder::from_read(source).decode(self)
    }
}

/// Convert a quick-xml start tag into an owned [`StartTag`]
fn start_tag(start: &BytesStart<'_>, end: u64, delimiters: usize) -> Result<StartTag> {
    let name = QName::new(str::from_utf8(start.name().as_ref())?);

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        attributes.push(Attribute::new(key, value.into_owned()));
    }

    let len = (start.len() + delimiters) as u64;
    Ok(StartTag {
        name,
        attributes,
        offset: end.saturating_sub(len),
    })
}

/// Fresh element for a nested tag, attributes taken as-is
fn open_child(tag: StartTag) -> Element {
    trace!("<{}> at offset {}", tag.name, tag.offset);
    let mut child = Element::decoded(tag.name, tag.offset);
    child.replace_attributes(tag.attributes);
    child
}

/// Add stream attributes that `element` does not already carry
fn merge_attributes(element: &mut Element, attributes: Vec<Attribute>) {
    for attr in attributes {
        let is_default_ns = attr.name.prefix().is_none() && attr.local_name() == "xmlns";
        if is_default_ns && element.namespace().is_some() {
            continue;
        }
        let exists = element
            .attributes()
            .iter()
            .any(|a| a.local_name() == attr.local_name());
        if !exists {
            element.set_attribute(attr);
        }
    }
}
