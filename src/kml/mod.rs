//! KML Vocabulary
//!
//! The `kml` root element, the document parser and a catalog of typed
//! constructors. Everything here is built on the generic [`Element`] API.

pub mod attributes;
pub mod elements;

pub use attributes::{attr, attr_bool, attr_id, attr_int, attr_max_lines};
pub use elements::*;

use crate::dom::{Element, Item};
use crate::error::{Error, Result};
use crate::reader::Decoder;
use log::debug;
use std::io::Read;

/// KML 2.2 namespace, the root's default namespace
pub const NS_KML: &str = "http://www.opengis.net/kml/2.2";

/// Google extensions namespace, bound to `gx`
pub const NS_GX: &str = "http://www.google.com/kml/ext/2.2";

/// Atom namespace, bound to `atom`
pub const NS_ATOM: &str = "http://www.w3.org/2005/Atom";

/// Create the `kml` root element with its namespace declarations
pub fn kml<I>(items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    let mut root = Element::with_namespace(ELEM_KML, NS_KML, items);
    root.set_attribute(attr("xmlns:gx", NS_GX));
    root.set_attribute(attr("xmlns:kml", NS_KML));
    root.set_attribute(attr("xmlns:atom", NS_ATOM));
    root
}

/// Parse a KML document.
///
/// Returns [`Error::NotKml`] when the input is well-formed XML whose root
/// is not `kml`, and the underlying XML error when it is not well-formed.
pub fn parse<R: Read>(source: R) -> Result<Element> {
    let mut root = kml(Vec::<Item>::new());

    match Decoder::from_read(source).decode(&mut root) {
        Ok(()) => {
            debug!("parsed KML document with {} top-level elements", root.child_count());
            Ok(root)
        }
        Err(Error::UnexpectedElement(name)) => {
            debug!("root element `{}` is not kml", name);
            Err(Error::NotKml)
        }
        Err(error) => Err(error),
    }
}

/// Parse a KML document held in a string
pub fn parse_str(input: &str) -> Result<Element> {
    parse(input.as_bytes())
}
