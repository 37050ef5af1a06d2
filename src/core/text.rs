//! Text helpers
//!
//! Scalar formatting for attribute and content values, attribute value
//! escaping, and the check deciding when content is written as a CDATA
//! section.

use memchr::memchr2;
use std::borrow::Cow;

/// Returns true if content must be wrapped in a CDATA section.
///
/// Only `<` and `>` trigger wrapping; `&` alone goes through ordinary
/// entity escaping.
#[inline]
pub fn needs_cdata(content: &str) -> bool {
    memchr2(b'<', b'>', content.as_bytes()).is_some()
}

/// Escape an attribute value for a double-quoted attribute.
///
/// Escapes `&`, `<`, `>` and `"`. Apostrophes are left alone.
pub fn escape_attribute(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| matches!(b, b'<' | b'>' | b'&' | b'"')) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Format a boolean the way KML expects it
#[inline]
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Format a float as the shortest decimal that round-trips.
///
/// Never uses exponent notation and never leaves trailing zeros, so
/// `1.0` becomes `1` and `0.25` stays `0.25`.
pub fn format_float(value: f64) -> String {
    value.to_string()
}
