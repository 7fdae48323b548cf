//! HTML output writer.
//!
//! An append-only buffer: fragments are pushed in document order and the
//! whole document is taken out once at the end.

use crate::escape;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use livemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.open_tag("p", "lead");
/// writer.write_escaped_code("a < b");
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p class=\"lead\">a &lt; b</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Class attributes make styled output noticeably larger than the
    /// Markdown it came from.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len * 2 + 256),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `<tag>` or `<tag class="...">` when `class` is non-empty.
    #[inline]
    pub fn open_tag(&mut self, tag: &str, class: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_class(class);
        self.out.push('>');
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write ` class="..."`, or nothing for an empty class.
    #[inline]
    pub fn write_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.out.push_str(" class=\"");
            self.out.push_str(class);
            self.out.push('"');
        }
    }

    /// Write code content, escaping only angle brackets.
    #[inline]
    pub fn write_escaped_code(&mut self, code: &str) {
        escape::escape_code_into(&mut self.out, code);
    }

    /// Write text with HTML escaping (hardened mode).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write an attribute value for a double-quoted attribute.
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        escape::escape_attr_into(&mut self.out, attr);
    }

    /// Write display text supplied from outside the Markdown stream.
    #[inline]
    pub fn write_external_text(&mut self, text: &str) {
        escape::escape_external_text_into(&mut self.out, text);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// The output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}
