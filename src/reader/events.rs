//! Decoder Token Types
//!
//! Owned tokens handed from the pull reader to the tree builder. Owning
//! the data lets the builder recurse while the reader's buffer is reused.

use crate::core::names::QName;
use crate::dom::Attribute;

/// Token produced by [`super::Decoder::next_token`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag: `<name attrs...>`
    Start(StartTag),
    /// Self-closing tag: `<name attrs.../>`
    Empty(StartTag),
    /// Closing tag: `</name>`
    End(QName),
    /// Character data, entities resolved. CDATA sections arrive here too.
    Text(String),
    /// End of stream
    Eof,
}

/// Opening tag data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Tag name
    pub name: QName,
    /// Attributes in source order, values unescaped
    pub attributes: Vec<Attribute>,
    /// Byte offset of the opening `<`
    pub offset: u64,
}

impl Token {
    /// Check if this is an opening or self-closing tag
    pub fn is_start(&self) -> bool {
        matches!(self, Token::Start(_) | Token::Empty(_))
    }

    /// Get as start tag if applicable
    pub fn as_start(&self) -> Option<&StartTag> {
        match self {
            Token::Start(tag) | Token::Empty(tag) => Some(tag),
            _ => None,
        }
    }

    /// Get text if applicable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }
}
