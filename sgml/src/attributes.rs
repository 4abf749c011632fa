//! Ordered attribute storage for elements.

use compact_str::CompactString;
use facet::Facet;

/// A single attribute name-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Attribute {
    pub name: CompactString,
    pub value: String,
}

impl Attribute {
    /// An attribute with an empty value renders as its bare name.
    pub fn is_boolean(&self) -> bool {
        self.value.is_empty()
    }
}

/// An ordered collection of attributes with last-wins semantics.
///
/// Setting an attribute that already exists replaces its value in place, so
/// the output order is the order in which names were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Attributes {
    /// Ordered list of attributes
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create a new empty attribute collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute value. If the attribute already exists, updates its value.
    pub fn set(&mut self, name: impl Into<CompactString>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.entries.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.entries.push(Attribute { name, value });
        }
    }

    /// Append a space-separated value to an attribute, creating it if missing.
    ///
    /// The result is trimmed, so appending to a missing or empty attribute
    /// yields just the new value.
    pub fn append(&mut self, name: impl Into<CompactString>, value: &str) {
        let name = name.into();
        let combined = format!("{} {}", self.get(&name).unwrap_or_default(), value);
        self.set(name, combined.trim());
    }

    /// Iterate over all attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<CompactString>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}
