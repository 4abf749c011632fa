//! Markup serializer for element trees.
//!
//! Output follows a small set of rules:
//!
//! - Void elements never get end tags
//! - Attributes with an empty value render as their bare name
//! - Other attribute values are double-quoted, with `\` and `"` backslash-escaped
//! - Comments render as `<!-- text -->`; minimized comments drop their text
//! - Anonymous elements render their content or children without a tag
//! - Pretty output indents each nesting level and ends every element's line
//!   with a line terminator; content elements stay on one line
//!
//! The serializer also honors the streaming flags set by
//! [`crate::Element::flush`]: an already-flushed opening tag is skipped along
//! with the whitespace that led into it, and a blocked element emits neither
//! its closing tag nor the whitespace that would lead out of it.

use std::fmt::{self, Write};

use crate::element::{Body, Element};

/// Options for markup serialization.
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Whether to omit all indentation and line breaks (default: true)
    pub minimize: bool,
    /// Indentation unit, repeated once per depth (default: two spaces)
    pub indent: String,
    /// Line terminator for pretty output (default: "\n")
    pub newline: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            minimize: true,
            indent: "  ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl SerializeOptions {
    /// Create new default options (minimized output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing with indentation and line breaks.
    pub fn pretty(mut self) -> Self {
        self.minimize = false;
        self
    }

    /// Force minimized output.
    pub fn minimized(mut self) -> Self {
        self.minimize = true;
        self
    }

    /// Set a custom indentation unit (implies pretty-printing).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self.minimize = false;
        self
    }

    /// Set a custom line terminator (implies pretty-printing).
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self.minimize = false;
        self
    }
}

/// Serialize an element and its subtree, starting at depth 0.
pub fn serialize_element(elem: &Element, opts: &SerializeOptions) -> String {
    serialize_element_at(elem, opts, 0)
}

/// Serialize an element and its subtree as if nested `depth` levels deep.
pub fn serialize_element_at(elem: &Element, opts: &SerializeOptions, depth: usize) -> String {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, opts);
    ser.write_element(elem, opts.minimize, depth);
    out
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    options: &'a SerializeOptions,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a SerializeOptions) -> Self {
        Self { out, options }
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            let _ = self.out.write_str(&self.options.indent);
        }
    }

    fn write_newline(&mut self) {
        let _ = self.out.write_str(&self.options.newline);
    }

    /// Escape an attribute value: backslash and double quote get a backslash.
    fn write_attr_value_escaped(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\\' => {
                    let _ = write!(self.out, "\\\\");
                }
                '"' => {
                    let _ = write!(self.out, "\\\"");
                }
                _ => {
                    let _ = self.out.write_char(c);
                }
            }
        }
    }

    fn write_start_tag(&mut self, elem: &Element) {
        if elem.is_start_flushed() {
            return;
        }
        let _ = write!(self.out, "<{}", elem.name());
        for attr in elem.attrs().iter() {
            if attr.is_boolean() {
                let _ = write!(self.out, " {}", attr.name);
            } else {
                let _ = write!(self.out, " {}=\"", attr.name);
                self.write_attr_value_escaped(&attr.value);
                let _ = write!(self.out, "\"");
            }
        }
        let _ = write!(self.out, ">");
    }

    fn write_end_tag(&mut self, elem: &Element) {
        if elem.is_void() || elem.is_blocked() {
            return;
        }
        let _ = write!(self.out, "</{}>", elem.name());
    }

    fn write_comment(&mut self, elem: &Element, minimize: bool, depth: usize) {
        if minimize {
            return;
        }
        self.write_indent(depth);
        // a minimized comment still takes up its own line
        if !elem.is_minimized() {
            let _ = write!(self.out, "<!-- {} -->", elem.content().unwrap_or_default());
        }
        self.write_newline();
    }

    fn write_anonymous(&mut self, elem: &Element, minimize: bool, depth: usize) {
        let inner = minimize || elem.is_minimized();
        match elem.body() {
            Body::Content(text) => {
                if !minimize {
                    self.write_indent(depth);
                }
                let _ = self.out.write_str(text);
                if !minimize {
                    self.write_newline();
                }
            }
            Body::Children(children) => {
                for child in children {
                    self.write_element(child, inner, depth);
                }
            }
            Body::Empty => {}
        }
    }

    fn write_element(&mut self, elem: &Element, minimize: bool, depth: usize) {
        if elem.is_comment() {
            self.write_comment(elem, minimize, depth);
            return;
        }
        if elem.is_anonymous() {
            self.write_anonymous(elem, minimize, depth);
            return;
        }

        let inner = minimize || elem.is_minimized();
        let opens = !elem.is_start_flushed();
        let closes = !elem.is_blocked();
        let mut ends_line = !minimize && closes;

        if !minimize && opens {
            self.write_indent(depth);
        }

        match elem.body() {
            Body::Content(text) => {
                self.write_start_tag(elem);
                let _ = self.out.write_str(text);
                self.write_end_tag(elem);
            }
            Body::Children(children) => {
                self.write_start_tag(elem);
                if !inner && opens {
                    self.write_newline();
                }
                for child in children {
                    self.write_element(child, inner, depth + 1);
                }
                if !inner {
                    if elem.is_void() {
                        // the last child already ended the line
                        ends_line = false;
                    } else if closes {
                        self.write_indent(depth);
                    }
                }
                self.write_end_tag(elem);
            }
            Body::Empty => {
                self.write_start_tag(elem);
                self.write_end_tag(elem);
            }
        }

        if ends_line {
            self.write_newline();
        }
    }
}

// =============================================================================
// Convenience methods on Element
// =============================================================================

impl Element {
    /// Render this element and its subtree.
    ///
    /// `minimize` strips all indentation and line breaks; `depth` is the
    /// nesting level the element is rendered at.
    pub fn render(&self, minimize: bool, depth: usize) -> String {
        let opts = SerializeOptions {
            minimize,
            ..SerializeOptions::default()
        };
        serialize_element_at(self, &opts, depth)
    }

    /// Render this element with custom options.
    pub fn render_with_options(&self, opts: &SerializeOptions, depth: usize) -> String {
        serialize_element_at(self, opts, depth)
    }

    /// Render minimized markup at depth 0.
    pub fn to_markup(&self) -> String {
        self.render(true, 0)
    }

    /// Render indented markup at depth 0.
    pub fn to_markup_pretty(&self) -> String {
        self.render(false, 0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

// =============================================================================
// Tests
// =============================================================================
