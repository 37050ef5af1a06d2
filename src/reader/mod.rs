//! Reader Module
//!
//! Pull-style decoding of XML byte streams into element trees:
//! - Events: owned tokens handed from the reader to the tree builder
//! - Decoder: quick-xml driven tree builder with offset tracking

pub mod decoder;
pub mod events;

pub use decoder::Decoder;
pub use events::{StartTag, Token};
