//! Block-level event types.

use crate::Range;

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet list (`*`, `-` or `+` marker).
    Unordered,
    /// Numbered list (`1.` marker).
    Ordered,
}

impl ListKind {
    /// HTML tag name for the list container.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Events emitted by the block parser.
///
/// Text ranges point into the rendered input and still need inline
/// processing; `Code` ranges are raw and must only be escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// A heading with its inline content.
    Heading {
        /// Heading level (1-3).
        level: u8,
        text: Range,
    },

    /// Start of a list container.
    ListStart(ListKind),
    /// A single list item's inline content.
    ListItem(Range),
    /// End of a list container.
    ListEnd(ListKind),

    /// A single-line blockquote.
    BlockQuote(Range),

    /// A single-line paragraph.
    Paragraph(Range),

    /// Start of a fenced code block.
    CodeBlockStart {
        /// Language tag from the opening fence, if any.
        language: Option<Range>,
    },
    /// One raw line of code content.
    Code(Range),
    /// End of a fenced code block.
    CodeBlockEnd,
}
