//! DOM Module - Owned XML Element Tree
//!
//! A mutable, ordered tree where each element owns its attributes and
//! children:
//! - Element: construction, mutation and lookup
//! - Attribute/Item: name/value pairs and heterogeneous constructor items
//! - Writer: deterministic encoding with optional indentation

pub mod attribute;
pub mod element;
pub mod writer;

pub use attribute::{Attribute, Item};
pub use element::Element;
pub use writer::Encoder;
