//! Attributes and constructor items

use super::element::Element;
use crate::core::names::QName;
use crate::error::{Error, Result};

/// A name/value attribute pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name (may include a prefix)
    pub name: QName,
    /// Attribute value, unescaped
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<QName>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Local name of the attribute
    #[inline]
    pub fn local_name(&self) -> &str {
        self.name.local()
    }

    /// Value as a string slice
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One entry of a heterogeneous constructor list: either an attribute or
/// a child element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Merged into the attribute set
    Attribute(Attribute),
    /// Appended (or prepended) to the child list
    Child(Element),
}

impl Item {
    /// Check the item can be applied to an element
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Item::Attribute(attr) if !attr.name.is_valid() => {
                Err(Error::InvalidName(attr.name.qualified()))
            }
            _ => Ok(()),
        }
    }
}

impl From<Attribute> for Item {
    fn from(attr: Attribute) -> Self {
        Item::Attribute(attr)
    }
}

impl From<Element> for Item {
    fn from(element: Element) -> Self {
        Item::Child(element)
    }
}

impl<N: Into<QName>, V: Into<String>> From<(N, V)> for Item {
    fn from((name, value): (N, V)) -> Self {
        Item::Attribute(Attribute::new(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_from_tuple() {
        let item = Item::from(("gx:id", "a1"));
        match item {
            Item::Attribute(attr) => {
                assert_eq!(attr.local_name(), "id");
                assert_eq!(attr.name.prefix(), Some("gx"));
                assert_eq!(attr.value(), "a1");
            }
            Item::Child(_) => panic!("Expected Attribute"),
        }
    }

    #[test]
    fn test_validate() {
        assert!(Item::from(("id", "x")).validate().is_ok());
        assert!(Item::from(Element::new("name", Vec::<Item>::new())).validate().is_ok());
        assert!(matches!(
            Item::from(("", "x")).validate(),
            Err(Error::InvalidName(name)) if name.is_empty()
        ));
        assert!(matches!(
            Item::from(("bad name", "x")).validate(),
            Err(Error::InvalidName(name)) if name == "bad name"
        ));
    }
}
