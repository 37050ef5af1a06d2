//! Element Encoder
//!
//! Writes an element tree through a quick-xml event writer. Output is
//! deterministic: attributes in stored order, children in document order,
//! and indentation only when the caller asks for it.
//!
//! The `kml` root tag is special: encoding it first writes the XML
//! declaration and a newline.

use super::element::Element;
use crate::core::text::{escape_attribute, needs_cdata};
use crate::error::Result;
use crate::kml::ELEM_KML;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute as XmlAttribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName as XmlName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// Encoder writing element trees as XML
pub struct Encoder<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Encoder<W> {
    /// Create an encoder producing compact output
    pub fn new(inner: W) -> Self {
        Encoder {
            writer: Writer::new(inner),
        }
    }

    /// Create an encoder putting each tag on its own line, nested tags
    /// indented by `indent_size` copies of `indent_char`
    pub fn with_indent(inner: W, indent_char: u8, indent_size: usize) -> Self {
        Encoder {
            writer: Writer::new_with_indent(inner, indent_char, indent_size),
        }
    }

    /// Encode an element and all of its descendants
    pub fn encode(&mut self, element: &Element) -> Result<()> {
        if element.local_name() == ELEM_KML && element.prefix().is_none() {
            self.write_prolog()?;
        }

        let name = element.qualified_name();
        let mut start = BytesStart::new(name.as_str());
        if let Some(namespace) = element.namespace() {
            push_attribute(&mut start, "xmlns", namespace);
        }
        for attr in element.attributes() {
            push_attribute(&mut start, &attr.name.qualified(), attr.value());
        }
        self.writer.write_event(Event::Start(start))?;

        let content = element.content();
        if needs_cdata(content) {
            self.writer.write_event(Event::CData(BytesCData::new(content)))?;
        } else if element.children().is_empty() {
            let text = BytesText::from_escaped(partial_escape(content));
            self.writer.write_event(Event::Text(text))?;
        } else {
            for child in element.children() {
                self.encode(child)?;
            }
        }

        self.writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        Ok(())
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_prolog(&mut self) -> Result<()> {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
        self.writer.write_event(Event::Decl(decl))?;
        self.writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        Ok(())
    }
}

/// Append an attribute, escaping its value with [`escape_attribute`]
fn push_attribute(start: &mut BytesStart<'_>, key: &str, value: &str) {
    let value = match escape_attribute(value) {
        Cow::Borrowed(v) => Cow::Borrowed(v.as_bytes()),
        Cow::Owned(v) => Cow::Owned(v.into_bytes()),
    };
    start.push_attribute(XmlAttribute {
        key: XmlName(key.as_bytes()),
        value,
    });
}

impl Element {
    /// Encode into a writer without indentation
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Encoder::new(writer).encode(self)
    }

    /// Encode into a byte vector without indentation
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut encoder = Encoder::new(Vec::new());
        encoder.encode(self)?;
        Ok(encoder.into_inner())
    }

    /// Encode into a string without indentation
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.to_bytes()?;
        String::from_utf8(bytes).map_err(|e| e.utf8_error().into())
    }

    /// Encode into a string, indenting nested tags by `indent_size` spaces
    pub fn to_xml_string_indented(&self, indent_size: usize) -> Result<String> {
        let mut encoder = Encoder::with_indent(Vec::new(), b' ', indent_size);
        encoder.encode(self)?;
        String::from_utf8(encoder.into_inner()).map_err(|e| e.utf8_error().into())
    }
}
