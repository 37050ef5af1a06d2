//! Core XML primitives
//!
//! - Names: qualified name splitting, matching and validation
//! - Text: scalar formatting and the CDATA policy check

pub mod names;
pub mod text;
