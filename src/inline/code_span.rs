//! Code span resolution.
//!
//! Code spans have highest precedence among inline elements: they are
//! resolved first, and every star inside one is flagged so emphasis never
//! looks at it. A backtick pairs with the next backtick on the line;
//! two adjacent backticks make an empty span.

use smallvec::SmallVec;

use super::marks::{flags, Mark};
use crate::Range;

/// A resolved code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan {
    /// Position of the opening backtick.
    pub opener: u32,
    /// Position of the closing backtick.
    pub closer: u32,
}

impl CodeSpan {
    /// The content range (between the backticks).
    #[inline]
    pub fn content_range(&self) -> Range {
        Range::new(self.opener + 1, self.closer)
    }
}

/// Resolve code spans in the mark buffer, appending them to `spans`
/// in order.
pub fn resolve_code_spans(marks: &mut [Mark], spans: &mut SmallVec<[CodeSpan; 4]>) {
    let len = marks.len();
    let mut i = 0;

    while i < len {
        if marks[i].ch != b'`' {
            i += 1;
            continue;
        }

        let Some(j) = (i + 1..len).find(|&j| marks[j].ch == b'`') else {
            break;
        };

        marks[i].resolve(flags::OPENER);
        marks[j].resolve(flags::CLOSER);
        for mark in &mut marks[i + 1..j] {
            mark.flags |= flags::IN_CODE;
        }
        spans.push(CodeSpan {
            opener: marks[i].pos,
            closer: marks[j].pos,
        });

        i = j + 1;
    }
}
