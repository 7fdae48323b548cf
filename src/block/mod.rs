//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (levels 1-3)
//! - Fenced code blocks
//! - Bullet and numbered lists
//! - Single-line blockquotes
//! - Paragraphs
//!
//! Each line is classified on its own; only open code blocks and open
//! lists carry over from one line to the next.

mod classify;
mod event;
mod parser;

pub use classify::{Line, LineClass, MAX_HEADING_LEVEL, classify};
pub use event::{BlockEvent, ListKind};
pub use parser::{BlockMode, BlockParser, CodeBuffer};
