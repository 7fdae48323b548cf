//! Mark collection and buffer for inline parsing.
//!
//! Marks represent potential delimiter positions (backticks and
//! asterisks) collected in a single pass before resolution. Every marker
//! byte gets its own mark; runs are not merged, since `**` is resolved as
//! two adjacent single-byte marks.

use memchr::memchr2_iter;
use smallvec::SmallVec;

/// Flags for mark state.
pub mod flags {
    /// Mark has been paired and emits markup instead of text.
    pub const RESOLVED: u8 = 0b0000_0001;
    /// Mark lies inside a code span (skip in emphasis processing).
    pub const IN_CODE: u8 = 0b0000_0010;
    /// Resolved mark opens its span.
    pub const OPENER: u8 = 0b0000_0100;
    /// Resolved mark closes its span.
    pub const CLOSER: u8 = 0b0000_1000;
    /// Resolved star belongs to a bold (`**`) pair.
    pub const STRONG: u8 = 0b0001_0000;
    /// Star that emits nothing: the second star of a bold pair, or an
    /// italic closer absorbed by the bold closer before it.
    pub const CONTINUATION: u8 = 0b0010_0000;
    /// Bold closer that first ends an italic span opened inside it.
    pub const WRAPS_EMPHASIS: u8 = 0b0100_0000;
}

/// A potential delimiter mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Byte position in the text.
    pub pos: u32,
    /// The delimiter character.
    pub ch: u8,
    /// State flags.
    pub flags: u8,
}

impl Mark {
    /// Create a new unresolved mark.
    #[inline]
    pub fn new(pos: u32, ch: u8) -> Self {
        Self { pos, ch, flags: 0 }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.flags & flags::RESOLVED != 0
    }

    /// An emphasis star that is neither paired nor inside code.
    #[inline]
    pub fn is_free_star(&self) -> bool {
        self.ch == b'*' && self.flags & (flags::RESOLVED | flags::IN_CODE) == 0
    }

    /// Mark as resolved with the given role flags.
    #[inline]
    pub fn resolve(&mut self, role: u8) {
        self.flags |= flags::RESOLVED | role;
    }
}

/// Buffer for collecting marks during inline scanning.
#[derive(Debug, Default)]
pub struct MarkBuffer {
    marks: SmallVec<[Mark; 32]>,
}

impl MarkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    #[inline]
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    #[inline]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[inline]
    pub fn marks_mut(&mut self) -> &mut [Mark] {
        &mut self.marks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Scan text and collect a mark for every `*` and `` ` `` byte.
pub fn collect_marks(text: &[u8], buffer: &mut MarkBuffer) {
    buffer.clear();
    for pos in memchr2_iter(b'*', b'`', text) {
        buffer.push(Mark::new(pos as u32, text[pos]));
    }
}
