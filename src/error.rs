//! Error types
//!
//! A single error enum covers decoding, encoding and the fallible
//! mutation entry points. Malformed XML and "valid XML, wrong vocabulary"
//! are kept apart so callers can tell garbage input from a different
//! document type.

use std::io;
use std::str::Utf8Error;

/// Errors produced by this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is well-formed XML but its root is not `kml`
    #[error("not KML")]
    NotKml,

    /// The opening tag does not match the element being decoded
    #[error("unexpected element `{0}`")]
    UnexpectedElement(String),

    /// A closing tag does not match the currently open element
    #[error("unexpected end tag `{found}`, expected `{expected}`")]
    UnexpectedEndTag {
        /// Qualified name of the open element
        expected: String,
        /// Qualified name found on the stream
        found: String,
    },

    /// The stream ended inside (or before) the named element
    #[error("unexpected end of stream inside `{0}`")]
    UnexpectedEof(String),

    /// An attribute item carries a name that is not a valid XML name
    #[error("invalid name `{0}`")]
    InvalidName(String),

    /// The stream is not well-formed XML
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// Underlying read or write failure
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Tag names or CDATA that are not UTF-8
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
