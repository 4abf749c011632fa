//! Build markup trees in code and serialize them, all at once or streamed.
//!
//! sgml provides:
//! - **Elements**: a single [`Element`] type that holds either content or
//!   children, plus ordered attributes
//! - **Argument classification**: constructor input split into content and
//!   attributes, see [`classify()`]
//! - **Serialization**: minimized or indented markup, see [`SerializeOptions`]
//! - **Streaming**: flush a partially-built tree now and the rest later
//!   without re-emitting anything
//!
//! # Example
//!
//! ```rust
//! use sgml::{Element, Value};
//!
//! let mut ul = Element::new("ul");
//! ul.attribute("class", "menu");
//! ul.child("li", "a")?;
//! ul.child("li", Value::map().text("b").named("class", "active"))?;
//!
//! assert_eq!(
//!     ul.to_markup(),
//!     r#"<ul class="menu"><li>a</li><li class="active">b</li></ul>"#
//! );
//! assert_eq!(
//!     ul.to_markup_pretty(),
//!     "<ul class=\"menu\">\n  <li>a</li>\n  <li class=\"active\">b</li>\n</ul>\n"
//! );
//! # Ok::<(), sgml::Error>(())
//! ```

mod tracing_macros;

pub mod attributes;
pub mod classify;
pub mod element;
mod error;
pub mod serialize;
mod stream;
pub mod value;

pub use attributes::{Attribute, Attributes};
pub use classify::{Classified, classify};
pub use element::{Body, COMMENT_NAME, Element};
pub use error::{Error, Result};
pub use serialize::{SerializeOptions, serialize_element, serialize_element_at};
pub use value::{Key, MapBuilder, Value};
