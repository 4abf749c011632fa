//! Dynamic argument values accepted by element construction.
//!
//! A [`Value`] is either a scalar (text, number, boolean), nothing at all, or a
//! container of keyed entries. Keys are typed: [`Key::Index`] marks a
//! positional entry, [`Key::Name`] a named one. The classifier in
//! [`crate::classify`] decides what becomes content and what becomes an
//! attribute based on that shape.
//!
//! # Example
//!
//! ```rust
//! use sgml::Value;
//!
//! // bare content
//! let _ = Value::from("my content");
//!
//! // an attribute set
//! let _ = Value::from([("size", "5"), ("title", "test")]);
//!
//! // content plus attribute sets, in any order
//! let _ = Value::map()
//!     .attrs([("size", 5)])
//!     .text("my content")
//!     .attrs([("title", "test")])
//!     .build();
//! ```

use std::fmt;

/// Key of an entry inside a [`Value::Map`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Positional entry
    Index(usize),
    /// Named entry
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// An argument value, as passed to [`crate::Element::construct`] and friends.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No argument
    #[default]
    Null,
    /// Literal text
    Text(String),
    /// Integer, rendered in decimal
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean; `true` renders as `1`, `false` as the empty string
    Bool(bool),
    /// Ordered container of keyed entries
    Map(Vec<(Key, Value)>),
}

impl Value {
    /// Start building a container value entry by entry.
    pub fn map() -> MapBuilder {
        MapBuilder::default()
    }

    /// A container of positional entries.
    pub fn seq<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v.into()))
                .collect(),
        )
    }

    /// A container of named entries, i.e. an attribute set.
    pub fn attrs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (Key::Name(k.into()), v.into()))
                .collect(),
        )
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// The string form of a scalar. Returns `None` for containers.
    pub fn to_scalar_string(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Text(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Map(_) => None,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Text(i.to_string()),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<Key>, V: Into<Value>> From<Vec<(K, V)>> for Value {
    fn from(entries: Vec<(K, V)>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<MapBuilder> for Value {
    fn from(builder: MapBuilder) -> Self {
        builder.build()
    }
}

/// Builder for mixed containers: content fragments, attribute sets and
/// named pairs in whatever order the caller needs.
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    entries: Vec<(Key, Value)>,
    next_index: usize,
}

impl MapBuilder {
    fn push_positional(mut self, value: Value) -> Self {
        self.entries.push((Key::Index(self.next_index), value));
        self.next_index += 1;
        self
    }

    /// Append a positional content fragment.
    pub fn text(self, value: impl Into<Value>) -> Self {
        self.push_positional(value.into())
    }

    /// Append a positional attribute set.
    pub fn attrs<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.push_positional(Value::attrs(pairs))
    }

    /// Append a named entry.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((Key::Name(name.into()), value.into()));
        self
    }

    pub fn build(self) -> Value {
        Value::Map(self.entries)
    }
}
