//! The element tree: construction and mutation.
//!
//! An [`Element`] owns its children outright. Its [`Body`] is either empty,
//! literal content, or a list of children, never content and children at
//! once. Attaching a child to an element that holds content first demotes
//! that content into an anonymous child, so document order is preserved.

use compact_str::CompactString;
use facet::Facet;

use crate::attributes::Attributes;
use crate::classify::classify;
use crate::error::Result;
use crate::value::Value;
use crate::{debug, trace};

/// Reserved element name marking a comment node.
pub const COMMENT_NAME: &str = "--";

/// What an element holds between its tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Facet)]
#[repr(u8)]
pub enum Body {
    /// Nothing at all
    #[default]
    Empty,
    /// Literal text (never empty)
    Content(String),
    /// Child elements (never empty)
    Children(Vec<Element>),
}

impl Body {
    /// Turn this body into a child list, demoting any content into an
    /// anonymous first child.
    fn children_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self, Body::Children(_)) {
            let demoted = match std::mem::take(self) {
                Body::Content(text) => {
                    trace!(len = text.len(), "demoting content into anonymous child");
                    vec![Element::text(text)]
                }
                _ => Vec::new(),
            };
            *self = Body::Children(demoted);
        }
        match self {
            Body::Children(children) => children,
            _ => unreachable!("body was just turned into a child list"),
        }
    }
}

/// A markup element: a tag name, attributes, and either content or children.
///
/// An empty name makes the element anonymous: it renders its content (or
/// children) without any surrounding tag.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Element {
    name: CompactString,
    body: Body,
    attrs: Attributes,
    is_void: bool,
    minimize: bool,
    blocked: bool,
    start_flushed: bool,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            body: Body::Empty,
            attrs: Attributes::new(),
            is_void: false,
            minimize: false,
            blocked: false,
            start_flushed: false,
        }
    }

    /// Create a void element, which never gets a closing tag.
    pub fn void(name: impl Into<CompactString>) -> Self {
        Self {
            is_void: true,
            ..Self::new(name)
        }
    }

    /// Create an anonymous element carrying literal text.
    pub fn text(content: impl Into<String>) -> Self {
        let mut elem = Self::new("");
        elem.write(content);
        elem
    }

    /// Create an element from classifier input. See [`crate::classify`] for
    /// how `args` is split into content and attributes.
    pub fn construct(
        name: impl Into<CompactString>,
        args: impl Into<Value>,
        is_void: bool,
    ) -> Result<Self> {
        let mut classified = classify(args)?;
        let content = std::mem::take(&mut classified.content);
        let mut elem = Self {
            is_void,
            ..Self::new(name)
        };
        debug!(
            name = %elem.name,
            is_void,
            content_len = content.len(),
            "constructing element"
        );
        elem.write(content);
        elem.attrs = classified.into_attributes();
        Ok(elem)
    }

    /// Create a non-void element from classifier input.
    pub fn with_args(name: impl Into<CompactString>, args: impl Into<Value>) -> Result<Self> {
        Self::construct(name, args, false)
    }

    // ---------------------------------------------------------------------
    // flags
    // ---------------------------------------------------------------------

    /// Always render the inside of this element minimized.
    pub fn minimize(&mut self) -> &mut Self {
        self.minimize = true;
        self
    }

    /// Withhold the closing tag from every render until [`Element::unblock`].
    pub fn block(&mut self) -> &mut Self {
        self.blocked = true;
        self
    }

    pub fn unblock(&mut self) -> &mut Self {
        self.blocked = false;
        self
    }

    // ---------------------------------------------------------------------
    // content and children
    // ---------------------------------------------------------------------

    /// Add text. With children present the text becomes a new anonymous
    /// child; otherwise it is appended to the content.
    ///
    /// Writing an empty string does nothing: no empty anonymous child is
    /// attached, even when children exist, so pretty output gets no blank
    /// line for it.
    pub fn write(&mut self, content: impl Into<String>) -> &mut Self {
        let content = content.into();
        if content.is_empty() {
            return self;
        }
        match &mut self.body {
            Body::Children(children) => children.push(Element::text(content)),
            Body::Content(existing) => existing.push_str(&content),
            Body::Empty => self.body = Body::Content(content),
        }
        self
    }

    /// Attach a child element and return it for further building.
    pub fn attach(&mut self, child: Element) -> &mut Element {
        let children = self.body.children_mut();
        let idx = children.len();
        children.push(child);
        &mut children[idx]
    }

    /// Create a child named `name` from classifier input, attach it, and
    /// return it.
    pub fn child_with(
        &mut self,
        name: impl Into<CompactString>,
        args: impl Into<Value>,
        is_void: bool,
    ) -> Result<&mut Element> {
        let child = Element::construct(name, args, is_void)?;
        Ok(self.attach(child))
    }

    /// Create and attach a non-void child from classifier input.
    pub fn child(
        &mut self,
        name: impl Into<CompactString>,
        args: impl Into<Value>,
    ) -> Result<&mut Element> {
        self.child_with(name, args, false)
    }

    /// Create and attach a void child from classifier input.
    pub fn void_child(
        &mut self,
        name: impl Into<CompactString>,
        args: impl Into<Value>,
    ) -> Result<&mut Element> {
        self.child_with(name, args, true)
    }

    /// Attach an empty child named `name` and return it.
    pub fn element(&mut self, name: impl Into<CompactString>) -> &mut Element {
        self.attach(Element::new(name))
    }

    /// Attach a comment.
    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.attach(Element::new(COMMENT_NAME)).write(text);
        self
    }

    // ---------------------------------------------------------------------
    // attributes
    // ---------------------------------------------------------------------

    /// Set every attribute in `attrs`, in order.
    pub fn attributes<I, K, V>(&mut self, attrs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<CompactString>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.attribute(name, value);
        }
        self
    }

    /// Set an attribute, replacing any existing value.
    pub fn attribute(
        &mut self,
        name: impl Into<CompactString>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attrs.set(name, value);
        self
    }

    /// Append a space-separated value to an attribute (e.g. another class).
    pub fn append_attribute(
        &mut self,
        name: impl Into<CompactString>,
        value: impl AsRef<str>,
    ) -> &mut Self {
        self.attrs.append(name, value.as_ref());
        self
    }

    // ---------------------------------------------------------------------
    // accessors
    // ---------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The literal content, if this element holds content.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            Body::Content(text) => Some(text),
            _ => None,
        }
    }

    /// The children, empty unless this element holds children.
    pub fn children(&self) -> &[Element] {
        match &self.body {
            Body::Children(children) => children,
            _ => &[],
        }
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.name == COMMENT_NAME
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    pub fn is_minimized(&self) -> bool {
        self.minimize
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Whether the opening tag has already been written by a flush.
    pub fn is_start_flushed(&self) -> bool {
        self.start_flushed
    }

    /// Forget everything already emitted. The name and flags survive; the
    /// opening tag is suppressed from now on.
    pub(crate) fn mark_flushed(&mut self) {
        self.start_flushed = true;
        self.body = Body::Empty;
        self.attrs.clear();
    }
}
