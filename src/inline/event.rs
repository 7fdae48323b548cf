//! Inline-level event types.

use crate::Range;

/// Events emitted by the inline parser.
///
/// Ranges are relative to the text handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text content, including any unmatched markers.
    Text(Range),

    /// Inline code content (already resolved, no further parsing).
    Code(Range),

    /// Start of bold (`**strong**`).
    StrongStart,
    /// End of bold.
    StrongEnd,

    /// Start of italic (`*em*`).
    EmphasisStart,
    /// End of italic.
    EmphasisEnd,
}
