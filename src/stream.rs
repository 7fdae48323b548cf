//! Live rendering of a growing token stream.
//!
//! Each pushed chunk extends the accumulated text and the whole text is
//! rendered again from scratch. Block boundaries can change
//! retroactively (a fence opened three chunks ago may only now close),
//! so nothing from an earlier render is reused.

use tracing::trace;

use crate::cite::Citation;
use crate::{Options, RenderedDocument, compose_with_options, render};

/// Accumulates streamed Markdown and renders snapshots of it.
///
/// # Example
/// ```
/// use livemark::{Options, StreamRenderer};
///
/// let mut stream = StreamRenderer::new(Options::default());
/// let partial = stream.push("```py\nprint(");
/// assert!(partial.html.contains("print("));
/// assert!(partial.html.ends_with("<span class=\"typing-cursor\"></span>"));
///
/// stream.push("1)\n```\n");
/// let done = stream.finish(&[]);
/// assert!(done.html.contains("print(1)"));
/// assert!(!done.html.contains("typing-cursor"));
/// ```
#[derive(Debug, Clone)]
pub struct StreamRenderer {
    text: String,
    options: Options,
    renders: u64,
}

impl StreamRenderer {
    pub fn new(options: Options) -> Self {
        Self {
            text: String::new(),
            options,
            renders: 0,
        }
    }

    /// Append a chunk and render everything received so far.
    ///
    /// The typing cursor is appended when [`Options::typing_cursor`] is
    /// set.
    pub fn push(&mut self, chunk: &str) -> RenderedDocument {
        self.text.push_str(chunk);
        self.snapshot()
    }

    /// Render everything received so far without appending.
    pub fn snapshot(&mut self) -> RenderedDocument {
        self.renders += 1;
        let mut doc = render(&self.text, &self.options);
        if self.options.typing_cursor {
            doc.html.push_str("<span class=\"");
            doc.html.push_str(self.options.theme.typing_cursor);
            doc.html.push_str("\"></span>");
        }
        trace!(
            render = self.renders,
            input = self.text.len(),
            output = doc.html.len(),
            "stream snapshot"
        );
        doc
    }

    /// The Markdown received so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the Markdown received so far, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of snapshots rendered so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// End the stream and compose the final document with its sources.
    pub fn finish(self, sources: &[Citation]) -> RenderedDocument {
        trace!(renders = self.renders, input = self.text.len(), "stream finished");
        compose_with_options(Some(&self.text), sources, &self.options)
    }
}

impl Default for StreamRenderer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
