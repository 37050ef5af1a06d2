//! Attribute constructors

use crate::core::text::format_bool;
use crate::dom::Attribute;

/// Attribute with name and value
pub fn attr(name: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(name, value)
}

/// `id` attribute
pub fn attr_id(value: impl Into<String>) -> Attribute {
    attr("id", value)
}

/// Boolean attribute, written as `1` or `0`
pub fn attr_bool(name: &str, value: bool) -> Attribute {
    attr(name, format_bool(value))
}

/// Integer attribute in decimal
pub fn attr_int(name: &str, value: i64) -> Attribute {
    attr(name, value.to_string())
}

/// `maxLines` attribute
pub fn attr_max_lines(n: i64) -> Attribute {
    attr_int("maxLines", n)
}
