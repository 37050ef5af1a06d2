//! Element tree node
//!
//! An `Element` owns its attributes and children outright. Trees are built
//! top-down (by constructors or by the decoder) and never share nodes, so
//! plain `Vec` ownership is enough; there are no parent links.
//!
//! All lookups are linear scans in document order.

use super::attribute::{Attribute, Item};
use crate::core::names::QName;
use crate::core::text::{format_bool, format_float};
use crate::error::Result;

/// One XML tag instance
///
/// An element is either a leaf carrying text content or a container
/// carrying children, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: QName,
    namespace: Option<String>,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    content: String,
    offset: u64,
}

impl Element {
    /// Create an element from a name and a list of attributes and children.
    ///
    /// Attribute items are merged into the attribute set in order (later
    /// names overwrite earlier ones), element items become children in the
    /// order given.
    ///
    /// # Panics
    ///
    /// Panics if an attribute item has an invalid XML name. Constructor call
    /// sites are fixed at compile time, so this is a programming error; use
    /// [`Element::add_child`] to handle untrusted items.
    pub fn new<I>(name: impl Into<QName>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut element = Element::named(name);
        if let Err(error) = element.add_child(items) {
            panic!("cannot construct <{}>: {}", element.name, error);
        }
        element
    }

    /// Create an empty element
    pub fn named(name: impl Into<QName>) -> Self {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    /// Create an element bound to a default namespace, written as `xmlns`
    ///
    /// # Panics
    ///
    /// Same contract as [`Element::new`].
    pub fn with_namespace<I>(name: impl Into<QName>, namespace: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut element = Element::new(name, items);
        element.namespace = Some(namespace.into());
        element
    }

    /// Element produced by the decoder at a known stream position
    pub(crate) fn decoded(name: QName, offset: u64) -> Self {
        Element {
            name,
            offset,
            ..Element::default()
        }
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// Tag name
    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Tag local name
    #[inline]
    pub fn local_name(&self) -> &str {
        self.name.local()
    }

    /// Tag prefix, if any
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.name.prefix()
    }

    /// Tag name as written in markup
    pub fn qualified_name(&self) -> String {
        self.name.qualified()
    }

    /// Default namespace assigned at construction
    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Byte offset of the opening `<` in the decoded stream.
    ///
    /// Zero for elements built in code.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attribute_value("id")
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Returns true if the element has the attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Number of attributes
    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Attributes in stored order
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Find an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name.matches(name))
    }

    /// Find an attribute value by name
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(Attribute::value)
    }

    /// Set an attribute.
    ///
    /// An existing attribute with the same local name is updated in place,
    /// value and prefix both, keeping its position. Otherwise the attribute
    /// is appended.
    pub fn set_attribute(&mut self, attr: Attribute) {
        let existing = self
            .attributes
            .iter_mut()
            .find(|a| a.local_name() == attr.local_name());

        match existing {
            Some(slot) => {
                slot.name.set_prefix(attr.name.prefix().map(str::to_owned));
                slot.value = attr.value;
            }
            None => self.attributes.push(attr),
        }
    }

    pub(crate) fn replace_attributes(&mut self, attributes: Vec<Attribute>) {
        self.attributes = attributes;
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Returns true if a child with the name exists
    pub fn has_child(&self, name: &str) -> bool {
        self.child_by_name(name).is_some()
    }

    /// Number of child elements
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children in document order
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child at position
    pub fn child_at(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// Mutable child at position
    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    /// First child with the name
    pub fn child_by_name(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name.matches(name))
    }

    /// Mutable first child with the name
    pub fn child_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name.matches(name))
    }

    /// First child whose `id` attribute equals `id`
    pub fn child_by_id(&self, id: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.id() == Some(id))
    }

    /// Add attributes and children.
    ///
    /// Items are validated before anything is applied, so on error the
    /// element is unchanged.
    pub fn add_child<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items = collect_items(items)?;
        for item in items {
            match item {
                Item::Attribute(attr) => self.set_attribute(attr),
                Item::Child(child) => self.push_child(child),
            }
        }
        Ok(())
    }

    /// Insert children before all existing children.
    ///
    /// Prepended children keep their relative order. Attribute items are
    /// handled as in [`Element::add_child`]. Atomic: on error nothing changes.
    pub fn prepend_child<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items = collect_items(items)?;
        let mut children = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Item::Attribute(attr) => self.set_attribute(attr),
                Item::Child(child) => children.push(child),
            }
        }

        if !children.is_empty() {
            self.content.clear();
            self.children.splice(0..0, children);
        }
        Ok(())
    }

    /// Remove all children. Content is left as it is.
    pub fn remove_children(&mut self) {
        self.children.clear();
    }

    /// Remove and return the child at position.
    ///
    /// Out of range returns `None` and leaves the children untouched.
    pub fn remove_child_at(&mut self, index: usize) -> Option<Element> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.content.clear();
        self.children.push(child);
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Text content; empty for containers
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text content as bytes
    #[inline]
    pub fn content_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Set text content. Ignored when the element has children.
    pub fn set_content(&mut self, content: impl Into<String>) {
        if self.children.is_empty() {
            self.content = content.into();
        }
    }

    /// Set integer content
    pub fn set_int_content(&mut self, value: i64) {
        self.set_content(value.to_string());
    }

    /// Set float content using the shortest round-trip decimal
    pub fn set_float_content(&mut self, value: f64) {
        self.set_content(format_float(value));
    }

    /// Set boolean content as `1` or `0`
    pub fn set_bool_content(&mut self, value: bool) {
        self.set_content(format_bool(value));
    }

    /// Content of the first child with the name
    pub fn child_content(&self, name: &str) -> Option<&str> {
        self.child_by_name(name).map(Element::content)
    }
}

fn collect_items<I>(items: I) -> Result<Vec<Item>>
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

/// Build a `Vec<Item>` from a mix of attributes and elements
///
/// ```
/// use rustykml::{items, Attribute, Element};
///
/// let folder = Element::new("Folder", items![
///     Attribute::new("id", "f1"),
///     Element::named("name"),
/// ]);
/// assert_eq!(folder.id(), Some("f1"));
/// assert_eq!(folder.child_count(), 1);
/// ```
#[macro_export]
macro_rules! items {
    () => {
        ::std::vec::Vec::<$crate::Item>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Item::from($item)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::items;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn leaf(name: &str, content: &str) -> Element {
        let mut element = Element::named(name);
        element.set_content(content);
        element
    }

    fn folder(id: &str) -> Element {
        Element::new("Folder", [Attribute::new("id", id)])
    }

    fn document() -> Element {
        Element::new(
            "Document",
            [leaf("name", "name"), leaf("description", "desc"), folder("f1")],
        )
    }

    fn local_names(element: &Element) -> Vec<&str> {
        element.children().iter().map(Element::local_name).collect()
    }

    #[test]
    fn test_new_interleaved_items() {
        let element = Element::new(
            "Schema",
            items![
                Attribute::new("name", "first"),
                leaf("name", "x"),
                Attribute::new("id", "s1"),
                Attribute::new("name", "second"),
                folder("f1"),
            ],
        );

        let attrs: Vec<_> = element
            .attributes()
            .iter()
            .map(|a| (a.local_name(), a.value()))
            .collect();
        assert_eq!(attrs, vec![("name", "second"), ("id", "s1")]);
        assert_eq!(local_names(&element), vec!["name", "Folder"]);
        assert_eq!(element.offset(), 0);
    }

    #[test]
    #[should_panic(expected = "invalid name")]
    fn test_new_panics_on_invalid_item() {
        Element::new("Folder", [Attribute::new("not valid", "x")]);
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut element = Element::new(
            "Style",
            [Attribute::new("id", "a"), Attribute::new("kind", "b")],
        );

        element.set_attribute(Attribute::new("gx:id", "c"));
        element.set_attribute(Attribute::new("extra", "d"));

        let attrs: Vec<_> = element
            .attributes()
            .iter()
            .map(|a| (a.name.qualified(), a.value()))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ("gx:id".to_string(), "c"),
                ("kind".to_string(), "b"),
                ("extra".to_string(), "d"),
            ]
        );
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new(
            "kml",
            [
                Attribute::new("xmlns:gx", "http://www.google.com/kml/ext/2.2"),
                Attribute::new("id", "root"),
            ],
        );

        assert!(element.has_attribute("xmlns:gx"));
        assert!(element.has_attribute("gx"));
        assert!(!element.has_attribute("xmlns:atom"));
        assert_eq!(element.attribute_count(), 2);
        assert_eq!(element.id(), Some("root"));
        assert_eq!(element.attribute("missing"), None);
        assert_eq!(element.attribute_value("missing"), None);
    }

    #[test]
    fn test_add_child() {
        let mut doc = Element::named("Document");
        doc.add_child([leaf("name", "name"), leaf("description", "desc")])
            .unwrap();

        assert_eq!(local_names(&doc), vec!["name", "description"]);
    }

    #[test]
    fn test_add_child_invalid_leaves_element_unchanged() {
        let mut doc = document();
        let before = doc.clone();

        let result = doc.add_child(items![leaf("Snippet", "x"), Attribute::new("", "v")]);

        assert!(matches!(result, Err(Error::InvalidName(_))));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_prepend_child() {
        let mut doc = Element::new("Document", [leaf("name", "name"), leaf("description", "desc")]);

        doc.prepend_child([folder("f1"), folder("f2")]).unwrap();

        assert_eq!(local_names(&doc), vec!["Folder", "Folder", "name", "description"]);
        assert_eq!(doc.child_at(0).and_then(Element::id), Some("f1"));
        assert_eq!(doc.child_at(1).and_then(Element::id), Some("f2"));
    }

    #[test]
    fn test_prepend_child_with_attributes() {
        let mut doc = Element::new("Document", [leaf("name", "name")]);

        doc.prepend_child(items![Attribute::new("id", "d1"), folder("f1")])
            .unwrap();

        assert_eq!(doc.id(), Some("d1"));
        assert_eq!(local_names(&doc), vec!["Folder", "name"]);
    }

    #[test]
    fn test_prepend_child_is_atomic() {
        let mut doc = document();
        let before = doc.clone();

        let result = doc.prepend_child(items![
            folder("f2"),
            Attribute::new("id", "d1"),
            Attribute::new("1bad", "v"),
        ]);

        assert!(result.is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_children() {
        let mut doc = document();
        doc.remove_children();
        assert_eq!(doc.child_count(), 0);
        assert_eq!(doc.content(), "");
    }

    #[rstest]
    #[case::start(0, "name", vec!["description", "Folder"])]
    #[case::middle(1, "description", vec!["name", "Folder"])]
    #[case::end(2, "Folder", vec!["name", "description"])]
    fn test_remove_child_at(
        #[case] index: usize,
        #[case] removed: &str,
        #[case] remaining: Vec<&str>,
    ) {
        let mut doc = document();

        let got = doc.remove_child_at(index).unwrap();

        assert_eq!(got.local_name(), removed);
        assert_eq!(local_names(&doc), remaining);
    }

    #[test]
    fn test_remove_child_at_out_of_range() {
        let mut doc = document();
        let before = doc.clone();

        assert!(doc.remove_child_at(3).is_none());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_lookups() {
        let doc = Element::new(
            "Document",
            [leaf("name", "name"), folder("f1"), folder("f2")],
        );

        assert_eq!(doc.child_by_id("f2").and_then(Element::id), Some("f2"));
        assert!(doc.child_by_id("f3").is_none());
        assert_eq!(doc.child_by_name("Folder").and_then(Element::id), Some("f1"));
        assert!(doc.child_by_name("Snippet").is_none());
        assert!(doc.has_child("name"));
        assert!(!doc.has_child("Placemark"));
        assert!(doc.child_at(3).is_none());
    }

    #[test]
    fn test_child_by_name_mut() {
        let mut doc = document();
        doc.child_by_name_mut("name").unwrap().set_content("renamed");
        assert_eq!(doc.child_content("name"), Some("renamed"));
    }

    #[test]
    fn test_content_ignored_on_container() {
        let mut doc = Element::named("Document");
        doc.add_child([leaf("name", "x")]).unwrap();

        doc.set_content("ignored");
        doc.set_int_content(42);

        assert_eq!(doc.content(), "");
        assert!(doc.content_bytes().is_empty());
    }

    #[test]
    fn test_adding_child_clears_content() {
        let mut element = leaf("description", "text");
        element.add_child([leaf("name", "x")]).unwrap();
        assert_eq!(element.content(), "");
    }

    #[test]
    fn test_scalar_content() {
        let mut element = Element::named("value");

        element.set_int_content(-7);
        assert_eq!(element.content(), "-7");

        element.set_float_content(2.50);
        assert_eq!(element.content(), "2.5");

        element.set_bool_content(true);
        assert_eq!(element.content(), "1");
        assert_eq!(element.content_bytes(), b"1");
    }

    #[test]
    fn test_child_content() {
        let doc = document();
        assert_eq!(doc.child_content("description"), Some("desc"));
        assert_eq!(doc.child_content("Folder"), Some(""));
        assert_eq!(doc.child_content("Snippet"), None);
    }

    #[test]
    fn test_namespace() {
        let root = Element::with_namespace("kml", "http://www.opengis.net/kml/2.2", items![]);
        assert_eq!(root.namespace(), Some("http://www.opengis.net/kml/2.2"));
        assert_eq!(root.local_name(), "kml");
        assert_eq!(root.qualified_name(), "kml");
        assert!(root.prefix().is_none());
    }
}
