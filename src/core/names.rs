//! Qualified names
//!
//! Element and attribute names are stored split at the first colon into
//! an optional prefix and a local name. Prefixes are kept verbatim, they
//! are never resolved to namespace URIs.

use memchr::memchr;
use std::fmt;

/// A possibly prefixed XML name: `prefix:local` or `local`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QName {
    prefix: Option<String>,
    local: String,
}

impl QName {
    /// Create a name from its textual form, splitting off any prefix
    pub fn new(name: &str) -> Self {
        let (prefix, local) = split_name(name);
        QName {
            prefix: prefix.map(str::to_owned),
            local: local.to_owned(),
        }
    }

    /// Local part of the name (after the colon)
    #[inline]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Prefix (before the colon), if any
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Replace the prefix, keeping the local part
    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    /// Full name as written in markup
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local),
            None => self.local.clone(),
        }
    }

    /// Match a lookup query.
    ///
    /// A query containing a colon is compared against the qualified name,
    /// anything else against the local name only.
    pub fn matches(&self, query: &str) -> bool {
        match split_name(query) {
            (Some(prefix), local) => self.prefix.as_deref() == Some(prefix) && self.local == local,
            (None, local) => self.local == local,
        }
    }

    /// Check the name is a well-formed XML name
    pub fn is_valid(&self) -> bool {
        is_valid_name(&self.local) && self.prefix.as_deref().map_or(true, is_valid_name)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}:", prefix)?;
        }
        f.write_str(&self.local)
    }
}

impl From<&str> for QName {
    fn from(name: &str) -> Self {
        QName::new(name)
    }
}

impl From<String> for QName {
    fn from(name: String) -> Self {
        QName::new(&name)
    }
}

/// Split a name into prefix and local name at the first colon
pub fn split_name(name: &str) -> (Option<&str>, &str) {
    match memchr(b':', name.as_bytes()) {
        Some(pos) => (Some(&name[..pos]), &name[pos + 1..]),
        None => (None, name),
    }
}

/// Check a colon-free name segment
fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.first() {
        Some(&first) if is_name_start_char(first) => bytes[1..].iter().all(|&b| is_name_char(b)),
        _ => false,
    }
}

/// Check if byte can start an XML name
#[inline]
fn is_name_start_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_') || b >= 0x80
}

/// Check if byte is valid in XML name
#[inline]
fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.') || b >= 0x80
}
