//! Block parser implementation.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::Range;
use crate::diagnostic::Diagnostic;

use super::classify::{Line, LineClass, classify};
use super::event::{BlockEvent, ListKind};

/// Raw lines collected while a fenced code block is open.
#[derive(Debug, Clone, Default)]
pub struct CodeBuffer {
    /// Language tag of the opening fence.
    pub language: Option<Range>,
    /// Unprocessed content lines, in order.
    pub lines: SmallVec<[Range; 16]>,
    /// Line number of the opening fence.
    pub opened_at: usize,
}

/// The multi-line block currently open across line boundaries.
///
/// Code payload only exists while a code block is open, and a list can
/// only be open when no code block is.
#[derive(Debug, Clone, Default)]
pub enum BlockMode {
    #[default]
    None,
    Code(CodeBuffer),
    List(ListKind),
}

impl BlockMode {
    #[inline]
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    /// Kind of the open list, if any.
    #[inline]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::List(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Line-oriented block parser.
///
/// Holds no state beyond one parse: every call to [`BlockParser::parse`]
/// on a fresh parser sees the whole input from the first line.
pub struct BlockParser<'a> {
    input: &'a str,
    mode: BlockMode,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            mode: BlockMode::None,
            diagnostics: Vec::new(),
        }
    }

    /// Parse all blocks and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        let mut start = 0usize;
        for (idx, raw) in self.input.split('\n').enumerate() {
            // Code lines stay verbatim, `\r` included.
            let text = match self.mode {
                BlockMode::Code(_) => raw,
                _ => raw.strip_suffix('\r').unwrap_or(raw),
            };
            let line = Line {
                text,
                start: start as u32,
                number: idx + 1,
            };
            start += raw.len() + 1;
            self.parse_line(&line, events);
        }

        self.finish(events);
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take collected diagnostics, leaving the parser's list empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn parse_line(&mut self, line: &Line<'_>, events: &mut Vec<BlockEvent>) {
        match classify(line, &self.mode) {
            LineClass::ContinueCode => {
                if let BlockMode::Code(buffer) = &mut self.mode {
                    buffer.lines.push(line.range());
                }
            }
            LineClass::OpenCode { language } => {
                self.close_list(events);
                trace!(line = line.number, "code block opened");
                self.mode = BlockMode::Code(CodeBuffer {
                    language,
                    lines: SmallVec::new(),
                    opened_at: line.number,
                });
            }
            LineClass::CloseCode => {
                self.flush_code(events);
            }
            LineClass::Heading { level, text } => {
                self.close_list(events);
                if text.is_empty() {
                    self.report(Diagnostic::EmptyHeading {
                        line: line.number,
                        level,
                    });
                }
                events.push(BlockEvent::Heading { level, text });
            }
            LineClass::ListItem { kind, text } => {
                self.open_list(kind, events);
                events.push(BlockEvent::ListItem(text));
            }
            LineClass::BlockQuote(text) => {
                self.close_list(events);
                events.push(BlockEvent::BlockQuote(text));
            }
            LineClass::Blank => {
                self.close_list(events);
            }
            LineClass::Paragraph(text) => {
                self.close_list(events);
                events.push(BlockEvent::Paragraph(text));
            }
        }
    }

    /// Reuse the open list when it has the same kind, otherwise close it
    /// and start a new container.
    fn open_list(&mut self, kind: ListKind, events: &mut Vec<BlockEvent>) {
        if self.mode.list_kind() == Some(kind) {
            return;
        }
        self.close_list(events);
        trace!(?kind, "list opened");
        events.push(BlockEvent::ListStart(kind));
        self.mode = BlockMode::List(kind);
    }

    fn close_list(&mut self, events: &mut Vec<BlockEvent>) {
        if let BlockMode::List(kind) = self.mode {
            events.push(BlockEvent::ListEnd(kind));
            self.mode = BlockMode::None;
        }
    }

    /// Emit the buffered code block and return to no open block.
    fn flush_code(&mut self, events: &mut Vec<BlockEvent>) -> Option<CodeBuffer> {
        if !self.mode.is_code() {
            return None;
        }
        let BlockMode::Code(buffer) = std::mem::take(&mut self.mode) else {
            return None;
        };
        trace!(lines = buffer.lines.len(), "code block closed");
        events.push(BlockEvent::CodeBlockStart {
            language: buffer.language,
        });
        events.extend(buffer.lines.iter().map(|&range| BlockEvent::Code(range)));
        events.push(BlockEvent::CodeBlockEnd);
        Some(buffer)
    }

    /// Close whatever is still open at end of input.
    fn finish(&mut self, events: &mut Vec<BlockEvent>) {
        self.close_list(events);

        if let Some(buffer) = self.flush_code(events) {
            let language = buffer
                .language
                .map(|range| range.slice(self.input).to_string());
            self.report(Diagnostic::UnterminatedCodeFence {
                line: buffer.opened_at,
                language,
            });
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(line = diagnostic.line(), %diagnostic, "block diagnostic");
        self.diagnostics.push(diagnostic);
    }
}
