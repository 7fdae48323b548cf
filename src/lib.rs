//! livemark: Streaming-tolerant Markdown to styled HTML renderer
//!
//! Renders Markdown produced by a generative model into styled HTML,
//! either as a finished document or as a growing prefix of a live token
//! stream.
//!
//! # Design Principles
//! - Pure function of the input: every call re-renders from scratch, so a
//!   fence that only closes several tokens later is always right
//! - Total: no input, complete or cut off mid-token, is an error
//! - Line-oriented: one classification per line, only code blocks and
//!   lists stay open across lines
//! - No regex: byte-level scanning with ranges into the input
//!
//! # Trust boundary
//! Paragraph and inline text is written without HTML escaping; only code
//! blocks escape `<` and `>`. Output is meant for a trusted display
//! surface fed by a trusted generation pipeline. Set
//! [`Options::escape_text`] when that does not hold.

pub mod block;
pub mod cite;
pub mod cursor;
pub mod diagnostic;
pub mod escape;
pub mod inline;
pub mod range;
pub mod render;
pub mod stream;
pub mod style;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind};
pub use cite::{Citation, SourcesError, dedup_citations, parse_grounding_chunks, parse_sources};
pub use diagnostic::Diagnostic;
pub use inline::{InlineEvent, InlineParser};
pub use range::Range;
pub use render::HtmlWriter;
pub use stream::StreamRenderer;
pub use style::Theme;

use std::fmt;

use memchr::memchr_iter;
use tracing::{debug, trace};

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// CSS classes for emitted elements.
    pub theme: Theme,
    /// Escape `<`, `>`, `&` and `"` in paragraph, heading, list, quote
    /// and inline code text.
    pub escape_text: bool,
    /// Label for code blocks whose fence has no language tag.
    pub default_code_language: &'static str,
    /// Heading of the reference section.
    pub references_title: &'static str,
    /// Append a typing cursor to in-progress stream renders.
    pub typing_cursor: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            theme: Theme::styled(),
            escape_text: false,
            default_code_language: "text",
            references_title: "Sources & References",
            typing_cursor: true,
        }
    }
}

/// A rendered document: markup plus anything worth reporting about the
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedDocument {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    #[inline]
    pub fn into_html(self) -> String {
        self.html
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = livemark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1 class="));
/// assert!(html.contains(">World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    render(input, options).html
}

/// Render Markdown to HTML, keeping parse diagnostics.
pub fn render(input: &str, options: &Options) -> RenderedDocument {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut diagnostics = Vec::new();
    render_to_writer(input, &mut writer, options, &mut diagnostics);
    RenderedDocument {
        html: writer.into_string(),
        diagnostics,
    }
}

/// Render a document body and append its reference section.
///
/// `None` markdown renders as an empty body. The reference section is
/// only written when at least one citation with a URL remains after
/// deduplication.
///
/// # Example
/// ```
/// use livemark::{compose, Citation};
///
/// let doc = compose(Some("text"), &[Citation::new("https://a.dev")]);
/// assert!(doc.html.contains("href=\"https://a.dev\""));
/// ```
pub fn compose(markdown: Option<&str>, sources: &[Citation]) -> RenderedDocument {
    compose_with_options(markdown, sources, &Options::default())
}

/// Render a document body and append its reference section, with options.
pub fn compose_with_options(
    markdown: Option<&str>,
    sources: &[Citation],
    options: &Options,
) -> RenderedDocument {
    let input = markdown.unwrap_or_default();
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut diagnostics = Vec::new();
    render_to_writer(input, &mut writer, options, &mut diagnostics);

    let citations = dedup_citations(sources);
    trace!(
        sources = sources.len(),
        unique = citations.len(),
        "writing references"
    );
    cite::write_references(&mut writer, &citations, options);

    RenderedDocument {
        html: writer.into_string(),
        diagnostics,
    }
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(
    input: &str,
    writer: &mut HtmlWriter,
    options: &Options,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Parse blocks
    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 32).max(16));
    parser.parse(&mut events);
    diagnostics.extend(parser.take_diagnostics());

    let theme = &options.theme;
    let mut inline = InlineRenderer::new(input, options);

    // Whether the next code line is the first of its block
    let mut first_code_line = true;

    for event in &events {
        match *event {
            BlockEvent::Heading { level, text } => {
                let tag = heading_tag(level);
                writer.open_tag(tag, theme.heading(level));
                inline.write(writer, text, diagnostics);
                writer.close_tag(tag);
                writer.newline();
            }
            BlockEvent::ListStart(kind) => {
                writer.open_tag(kind.tag(), list_class(theme, kind));
                writer.newline();
            }
            BlockEvent::ListItem(text) => {
                writer.write_str("  ");
                writer.open_tag("li", theme.list_item);
                inline.write(writer, text, diagnostics);
                writer.close_tag("li");
                writer.newline();
            }
            BlockEvent::ListEnd(kind) => {
                writer.close_tag(kind.tag());
                writer.newline();
            }
            BlockEvent::BlockQuote(text) => {
                writer.open_tag("blockquote", theme.blockquote);
                inline.write(writer, text, diagnostics);
                writer.close_tag("blockquote");
                writer.newline();
            }
            BlockEvent::Paragraph(text) => {
                writer.open_tag("p", theme.paragraph);
                inline.write(writer, text, diagnostics);
                writer.close_tag("p");
                writer.newline();
            }
            BlockEvent::CodeBlockStart { language } => {
                let language = language
                    .map(|range| range.slice(input))
                    .unwrap_or(options.default_code_language);
                writer.open_tag("div", theme.code_frame);
                writer.open_tag("div", theme.code_label);
                writer.write_escaped_code(language);
                writer.close_tag("div");
                writer.open_tag("pre", theme.code_pre);
                writer.open_tag("code", theme.code_block);
                first_code_line = true;
            }
            BlockEvent::Code(range) => {
                if !first_code_line {
                    writer.newline();
                }
                first_code_line = false;
                writer.write_escaped_code(range.slice(input));
            }
            BlockEvent::CodeBlockEnd => {
                writer.close_tag("code");
                writer.close_tag("pre");
                writer.close_tag("div");
                writer.newline();
            }
        }
    }

    trace!(
        input = input.len(),
        blocks = events.len(),
        output = writer.len(),
        "rendered"
    );
}

/// Runs the inline parser over block text and writes the result.
struct InlineRenderer<'a> {
    input: &'a str,
    options: &'a Options,
    parser: InlineParser,
    events: Vec<InlineEvent>,
    lines: LineCounter<'a>,
}

impl<'a> InlineRenderer<'a> {
    fn new(input: &'a str, options: &'a Options) -> Self {
        Self {
            input,
            options,
            parser: InlineParser::new(),
            events: Vec::with_capacity(16),
            lines: LineCounter::new(input),
        }
    }

    fn write(&mut self, writer: &mut HtmlWriter, range: Range, diagnostics: &mut Vec<Diagnostic>) {
        let text = range.slice(self.input);
        self.events.clear();
        let unmatched = self.parser.parse(text, &mut self.events);

        if unmatched.any() {
            let line = self.lines.line_at(range.start as usize);
            for (present, marker) in [(unmatched.star, '*'), (unmatched.backtick, '`')] {
                if present {
                    let diagnostic = Diagnostic::UnmatchedMarker { line, marker };
                    debug!(line, %diagnostic, "inline diagnostic");
                    diagnostics.push(diagnostic);
                }
            }
        }

        let theme = &self.options.theme;
        for event in &self.events {
            match *event {
                InlineEvent::Text(r) => self.write_text(writer, r.slice(text)),
                InlineEvent::Code(r) => {
                    writer.open_tag("code", theme.inline_code);
                    self.write_text(writer, r.slice(text));
                    writer.close_tag("code");
                }
                InlineEvent::StrongStart => writer.open_tag("strong", theme.strong),
                InlineEvent::StrongEnd => writer.close_tag("strong"),
                InlineEvent::EmphasisStart => writer.open_tag("em", theme.emphasis),
                InlineEvent::EmphasisEnd => writer.close_tag("em"),
            }
        }
    }

    #[inline]
    fn write_text(&self, writer: &mut HtmlWriter, text: &str) {
        if self.options.escape_text {
            writer.write_escaped_text(text);
        } else {
            writer.write_str(text);
        }
    }
}

#[inline]
fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        _ => "h3",
    }
}

#[inline]
fn list_class(theme: &Theme, kind: ListKind) -> &'static str {
    match kind {
        ListKind::Unordered => theme.unordered_list,
        ListKind::Ordered => theme.ordered_list,
    }
}

/// Maps byte offsets to 1-based line numbers.
///
/// Block events arrive in input order, so each query only counts the
/// newlines since the previous one and a whole render stays linear.
struct LineCounter<'a> {
    input: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    /// Line of `offset`. Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        debug_assert!(offset >= self.offset);
        let offset = offset.max(self.offset);
        self.line += memchr_iter(b'\n', &self.input[self.offset..offset]).count();
        self.offset = offset;
        self.line
    }
}
