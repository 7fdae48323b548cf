//! Inline parser for Markdown.
//!
//! Works on one physical line at a time; emphasis never spans lines.
//! Uses a three-phase approach:
//! 1. Mark Collection: single pass collecting `*` and `` ` `` positions
//! 2. Mark Resolution: by precedence (code spans → bold → italic)
//! 3. Event Emission: walk resolved marks and emit events

mod code_span;
mod emphasis;
pub mod event;
pub mod marks;

pub use code_span::CodeSpan;
pub use event::InlineEvent;

use smallvec::SmallVec;

use crate::Range;
use code_span::resolve_code_spans;
use emphasis::{resolve_emphasis, resolve_strong};
use marks::{collect_marks, flags, MarkBuffer};

/// Markers that were left as literal text after resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unmatched {
    /// At least one `*` had no partner.
    pub star: bool,
    /// At least one `` ` `` had no partner.
    pub backtick: bool,
}

impl Unmatched {
    #[inline]
    pub fn any(&self) -> bool {
        self.star || self.backtick
    }
}

/// Inline parser state.
///
/// Buffers are reused between lines; the parser itself carries nothing
/// from one call to the next.
#[derive(Debug, Default)]
pub struct InlineParser {
    mark_buffer: MarkBuffer,
    code_spans: SmallVec<[CodeSpan; 4]>,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line of inline content and emit events.
    pub fn parse(&mut self, text: &str, events: &mut Vec<InlineEvent>) -> Unmatched {
        let bytes = text.as_bytes();
        collect_marks(bytes, &mut self.mark_buffer);

        if self.mark_buffer.is_empty() {
            if !text.is_empty() {
                events.push(InlineEvent::Text(Range::from_usize(0, text.len())));
            }
            return Unmatched::default();
        }

        self.code_spans.clear();
        resolve_code_spans(self.mark_buffer.marks_mut(), &mut self.code_spans);
        resolve_strong(self.mark_buffer.marks_mut());
        resolve_emphasis(self.mark_buffer.marks_mut());

        self.emit(text.len() as u32, events)
    }

    fn emit(&self, text_len: u32, events: &mut Vec<InlineEvent>) -> Unmatched {
        let mut unmatched = Unmatched::default();
        let mut spans = self.code_spans.iter();
        let mut pos = 0u32;

        for mark in self.mark_buffer.marks() {
            if mark.flags & flags::IN_CODE != 0 {
                continue;
            }
            if !mark.is_resolved() {
                match mark.ch {
                    b'*' => unmatched.star = true,
                    _ => unmatched.backtick = true,
                }
                continue;
            }
            if mark.ch == b'`' && mark.flags & flags::CLOSER != 0 {
                continue;
            }

            push_text(events, pos, mark.pos);
            pos = mark.pos + 1;

            if mark.ch == b'`' {
                if let Some(span) = spans.next() {
                    events.push(InlineEvent::Code(span.content_range()));
                    pos = span.closer + 1;
                }
                continue;
            }

            if mark.flags & flags::CONTINUATION != 0 {
                continue;
            }
            if mark.flags & flags::WRAPS_EMPHASIS != 0 {
                events.push(InlineEvent::EmphasisEnd);
            }
            let opener = mark.flags & flags::OPENER != 0;
            let event = match (mark.flags & flags::STRONG != 0, opener) {
                (true, true) => InlineEvent::StrongStart,
                (true, false) => InlineEvent::StrongEnd,
                (false, true) => InlineEvent::EmphasisStart,
                (false, false) => InlineEvent::EmphasisEnd,
            };
            events.push(event);
        }

        push_text(events, pos, text_len);
        unmatched
    }
}

#[inline]
fn push_text(events: &mut Vec<InlineEvent>, start: u32, end: u32) {
    if end > start {
        events.push(InlineEvent::Text(Range::new(start, end)));
    }
}
