//! Streaming output: emit a growing tree piece by piece.
//!
//! [`Element::flush`] writes the current render to a sink and then forgets
//! what it wrote: the opening tag is marked as emitted and the content,
//! children and attributes are cleared. Building can then continue on the
//! same element, and the next flush emits only what was added since.
//!
//! Blocking an element keeps it open across flushes:
//!
//! ```rust
//! use sgml::Element;
//!
//! let mut out = Vec::new();
//! let mut ul = Element::new("ul");
//!
//! ul.block();
//! ul.element("li").write("first");
//! ul.flush(true, &mut out).unwrap();
//! assert_eq!(out, b"<ul><li>first</li>");
//!
//! ul.element("li").write("second");
//! ul.unblock();
//! ul.flush(true, &mut out).unwrap();
//! assert_eq!(out, b"<ul><li>first</li><li>second</li></ul>");
//! ```
//!
//! Concatenated, the flushed pieces equal a single render of the whole tree.
//! In minimized mode this holds for any interleaving of writes, attaches and
//! flushes. In pretty mode it holds as long as the element keeps the same
//! form (children or content) in every flush. Attributes set after the
//! opening tag went out are never emitted.

use std::io::{self, Write};

use crate::debug;
use crate::element::Element;
use crate::error::Result;

impl Element {
    /// Render this element at depth 0, write it to `sink`, and clear what was
    /// written.
    ///
    /// On success the opening tag is marked as emitted and the content,
    /// children and attributes are dropped; name and flags are kept.
    ///
    /// If the sink fails, the error is returned and the element is left
    /// exactly as it was, so the flush can be retried. Part of the markup
    /// may have reached the sink before the failure.
    pub fn flush<W: Write>(&mut self, minimize: bool, sink: &mut W) -> Result<()> {
        let markup = self.render(minimize, 0);
        if let Err(err) = sink.write_all(markup.as_bytes()).and_then(|()| sink.flush()) {
            debug!(name = %self.name(), error = %err, "flush failed");
            return Err(err.into());
        }
        debug!(
            name = %self.name(),
            bytes = markup.len(),
            blocked = self.is_blocked(),
            "flushed element"
        );
        self.mark_flushed();
        Ok(())
    }

    /// Flush to standard output.
    pub fn flush_stdout(&mut self, minimize: bool) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.flush(minimize, &mut lock)
    }
}
