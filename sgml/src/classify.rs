//! Argument classification: splitting raw constructor input into content
//! and attributes.
//!
//! The rules, applied in order:
//!
//! 1. [`Value::Null`] yields no content and no attributes.
//! 2. A scalar becomes the content verbatim.
//! 3. A [`Value::Map`] is walked entry by entry:
//!    - an entry whose value is itself a map is an attribute set, merged into
//!      the result (later sets win on collisions);
//!    - a named entry ([`Key::Name`]) is a single attribute assignment;
//!    - a positional entry ([`Key::Index`]) is a content fragment, appended to
//!      the content collected so far.
//!
//! Named entries are kept apart from merged sets: they are applied to the
//! element first, in encounter order, and the merged sets afterwards.

use crate::attributes::Attributes;
use crate::error::{Error, Result};
use crate::value::{Key, Value};

/// Outcome of [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Concatenated content fragments
    pub content: String,
    /// Attributes assigned by named entries, in encounter order
    pub named: Attributes,
    /// Union of all attribute sets
    pub merged: Attributes,
}

impl Classified {
    /// The attributes in the order an element receives them: named entries
    /// first, then merged sets (which win on collisions).
    pub fn into_attributes(self) -> Attributes {
        let mut attrs = self.named;
        for attr in self.merged.iter() {
            attrs.set(attr.name.clone(), attr.value.clone());
        }
        attrs
    }
}

/// Split `args` into content and attributes.
///
/// Fails with [`Error::InvalidArgument`] when an attribute set holds a value
/// that is itself a container.
pub fn classify(args: impl Into<Value>) -> Result<Classified> {
    let mut out = Classified::default();

    let entries = match args.into() {
        Value::Map(entries) => entries,
        scalar => {
            // scalars always stringify
            out.content = scalar.to_scalar_string().unwrap_or_default();
            return Ok(out);
        }
    };

    for (key, value) in entries {
        match (key, value) {
            (key, Value::Map(pairs)) => merge_attribute_set(&mut out.merged, &key, pairs)?,
            (Key::Name(name), value) => {
                let value = value.to_scalar_string().unwrap_or_default();
                out.named.set(name, value);
            }
            (Key::Index(_), value) => {
                out.content
                    .push_str(&value.to_scalar_string().unwrap_or_default());
            }
        }
    }

    Ok(out)
}

fn merge_attribute_set(into: &mut Attributes, key: &Key, pairs: Vec<(Key, Value)>) -> Result<()> {
    for (name, value) in pairs {
        let Some(value) = value.to_scalar_string() else {
            return Err(Error::invalid_argument(format!(
                "attribute `{name}` in set `{key}` has a nested container as its value"
            )));
        };
        into.set(name.to_string(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn attr_list(attrs: &Attributes) -> Vec<(String, String)> {
        attrs
            .iter()
            .map(|a| (a.name.to_string(), a.value.clone()))
            .collect()
    }

    #[test]
    fn test_null_is_empty() {
        let c = classify(Value::Null).unwrap();
        assert_eq!(c, Classified::default());
    }

    #[test]
    fn test_scalar_is_content() {
        let c = classify("my content").unwrap();
        assert_eq!(c.content, "my content");
        assert!(c.named.is_empty());
        assert!(c.merged.is_empty());

        let c = classify(42).unwrap();
        assert_eq!(c.content, "42");
    }

    #[test]
    fn test_named_pairs_are_attributes() {
        let c = classify([("size", "5"), ("title", "test")]).unwrap();
        assert_eq!(c.content, "");
        assert_eq!(
            attr_list(&c.named),
            vec![
                ("size".to_string(), "5".to_string()),
                ("title".to_string(), "test".to_string())
            ]
        );
    }

    #[test]
    fn test_content_then_attribute_set() {
        let c = classify(
            Value::map()
                .text("my content")
                .attrs([("size", "5"), ("title", "test")]),
        )
        .unwrap();
        assert_eq!(c.content, "my content");
        assert_eq!(c.merged.get("size"), Some("5"));
        assert_eq!(c.merged.get("title"), Some("test"));
    }

    #[test]
    fn test_attribute_set_then_content() {
        let c = classify(
            Value::map()
                .attrs([("size", "5"), ("title", "test")])
                .text("my content"),
        )
        .unwrap();
        assert_eq!(c.content, "my content");
        assert_eq!(c.merged.len(), 2);
    }

    #[test]
    fn test_interleaved_sets_and_fragments() {
        let c = classify(
            Value::map()
                .attrs([("size", "5")])
                .text("my ")
                .attrs([("title", "test")])
                .text("content"),
        )
        .unwrap();
        assert_eq!(c.content, "my content");
        assert_eq!(
            attr_list(&c.merged),
            vec![
                ("size".to_string(), "5".to_string()),
                ("title".to_string(), "test".to_string())
            ]
        );
    }

    #[test]
    fn test_later_set_wins() {
        let c = classify(
            Value::map()
                .attrs([("class", "a")])
                .attrs([("class", "b")]),
        )
        .unwrap();
        assert_eq!(c.merged.get("class"), Some("b"));
        assert_eq!(c.merged.len(), 1);
    }

    #[test]
    fn test_merged_sets_apply_after_named() {
        let c = classify(
            Value::map()
                .attrs([("class", "from-set")])
                .named("class", "from-pair")
                .named("id", "x"),
        )
        .unwrap();
        let attrs = c.into_attributes();
        assert_eq!(attrs.get("class"), Some("from-set"));
        let names: Vec<_> = attrs.iter().map(|a| a.name.to_string()).collect();
        assert_eq!(names, ["class", "id"]);
    }

    #[test]
    fn test_numeric_looking_name_is_attribute() {
        let c = classify(Value::map().named("5", "five")).unwrap();
        assert_eq!(c.content, "");
        assert_eq!(c.named.get("5"), Some("five"));
    }

    #[test]
    fn test_nested_container_rejected() {
        let bad = Value::map()
            .attrs([("style", Value::attrs([("color", "red")]))])
            .build();
        let err = classify(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
