//! RustyKML - KML document object model
//!
//! A small DOM for building and parsing KML:
//! - dom: owned element tree with attribute and child manipulation
//! - reader: streaming decode with byte offsets for every element
//! - dom::writer: deterministic encode, CDATA for markup-like content
//! - kml: the `kml` root, document parser and element catalog
//!
//! ```
//! use rustykml::kml::{attr_id, document, folder, kml, name, parse_str};
//! use rustykml::items;
//!
//! let root = kml(items![document(items![
//!     name("Trips"),
//!     folder(items![attr_id("f1"), name("2024")]),
//! ])]);
//!
//! let xml = root.to_xml_string_indented(2)?;
//! let parsed = parse_str(&xml)?;
//! assert_eq!(parsed.child_at(0).and_then(|d| d.child_by_id("f1")).and_then(|f| f.child_content("name")), Some("2024"));
//! # Ok::<(), rustykml::Error>(())
//! ```
//!
//! Trees are plain values with no internal synchronization; keep each one
//! confined to a single owner.

pub mod core;
pub mod dom;
pub mod error;
pub mod kml;
pub mod reader;

pub use crate::core::names::QName;
pub use dom::{Attribute, Element, Encoder, Item};
pub use error::{Error, Result};
pub use kml::{parse, parse_str};
pub use reader::Decoder;
