//! Line classification.
//!
//! Decides, for one line and the currently open block, what the line is.
//! Rules are checked in priority order and the first match wins:
//! code content, fence, blank, heading, bullet item, numbered item,
//! blockquote, paragraph.

use crate::cursor::Cursor;
use crate::Range;

use super::event::ListKind;
use super::parser::BlockMode;

/// Fence marker that opens and closes code blocks.
const FENCE: &str = "```";

/// Deepest heading level recognized; `####` and beyond are paragraphs.
pub const MAX_HEADING_LEVEL: usize = 3;

/// One `\n`-delimited line of input.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// Line content without the newline (and without a trailing `\r`).
    pub text: &'a str,
    /// Byte offset of the line within the whole input.
    pub start: u32,
    /// 1-based line number.
    pub number: usize,
}

impl<'a> Line<'a> {
    /// The whole line as an input-relative range.
    #[inline]
    pub fn range(&self) -> Range {
        Range::from_usize(0, self.text.len()).offset(self.start)
    }

    #[inline]
    fn local(&self, range: Range) -> Range {
        range.offset(self.start)
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Raw content inside an open code block.
    ContinueCode,
    /// Opening fence, with the language tag if one follows the marker.
    OpenCode { language: Option<Range> },
    /// Closing fence of the open code block.
    CloseCode,
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: Range },
    /// Bullet or numbered item; opening or continuing a list is decided
    /// by the parser against the open list kind.
    ListItem { kind: ListKind, text: Range },
    /// `> ` quote line.
    BlockQuote(Range),
    /// Whitespace-only line.
    Blank,
    /// Anything else.
    Paragraph(Range),
}

/// Classify `line` given the currently open block.
pub fn classify(line: &Line<'_>, mode: &BlockMode) -> LineClass {
    let trimmed = line.text.trim();

    if mode.is_code() {
        return if trimmed == FENCE {
            LineClass::CloseCode
        } else {
            LineClass::ContinueCode
        };
    }

    if trimmed.starts_with(FENCE) {
        return LineClass::OpenCode {
            language: fence_language(line),
        };
    }

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    let bytes = line.text.as_bytes();

    if let Some((level, text)) = try_heading(bytes) {
        return LineClass::Heading {
            level,
            text: line.local(text),
        };
    }

    if let Some(text) = try_bullet(bytes) {
        return LineClass::ListItem {
            kind: ListKind::Unordered,
            text: line.local(text),
        };
    }

    if let Some(text) = try_numbered(bytes) {
        return LineClass::ListItem {
            kind: ListKind::Ordered,
            text: line.local(text),
        };
    }

    if let Some(text) = try_blockquote(bytes) {
        return LineClass::BlockQuote(line.local(text));
    }

    LineClass::Paragraph(line.range())
}

/// Language tag after an opening fence, trimmed. `None` when absent.
fn fence_language(line: &Line<'_>) -> Option<Range> {
    let text = line.text;
    let fence_start = text.len() - text.trim_start().len();
    let after_fence = fence_start + FENCE.len();
    let rest = text[after_fence..].trim_end();
    let tag = rest.trim_start();
    if tag.is_empty() {
        return None;
    }
    let tag_start = after_fence + (rest.len() - tag.len());
    Some(line.local(Range::from_usize(tag_start, tag_start + tag.len())))
}

/// `#{1,3}` followed by whitespace. Returns the level and the text range.
fn try_heading(bytes: &[u8]) -> Option<(u8, Range)> {
    let mut cursor = Cursor::new(bytes);
    let level = cursor.skip_while(|b| b == b'#');
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    content_after_separator(cursor).map(|text| (level as u8, text))
}

/// `*`, `-` or `+` followed by whitespace.
fn try_bullet(bytes: &[u8]) -> Option<Range> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.at_any(b"*-+") {
        return None;
    }
    cursor.bump();
    content_after_separator(cursor)
}

/// One or more ASCII digits, a period, then whitespace.
fn try_numbered(bytes: &[u8]) -> Option<Range> {
    let mut cursor = Cursor::new(bytes);
    if cursor.skip_while(|b| b.is_ascii_digit()) == 0 || !cursor.eat(b'.') {
        return None;
    }
    content_after_separator(cursor)
}

/// `>` followed by whitespace.
fn try_blockquote(bytes: &[u8]) -> Option<Range> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.eat(b'>') {
        return None;
    }
    content_after_separator(cursor)
}

/// Require at least one space or tab at the cursor, then return
/// everything after the whitespace run.
fn content_after_separator(mut cursor: Cursor<'_>) -> Option<Range> {
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some(cursor.rest())
}
