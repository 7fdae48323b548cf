//! Non-fatal parse diagnostics.
//!
//! Rendering never fails. Input that is only partially well-formed (very
//! common mid-stream) still renders, and the oddities are reported here
//! alongside the markup.

use std::fmt;

/// Something worth knowing about the input that did not stop rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A code fence was still open at end of input; its buffered content
    /// was emitted as a closed block.
    UnterminatedCodeFence {
        /// Line of the opening fence (1-based).
        line: usize,
        /// Language tag of the opening fence, if any.
        language: Option<String>,
    },
    /// A heading marker followed only by whitespace.
    EmptyHeading { line: usize, level: u8 },
    /// An emphasis or code marker with no partner on its line, rendered
    /// as a literal character.
    UnmatchedMarker { line: usize, marker: char },
}

impl Diagnostic {
    /// 1-based line the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedCodeFence { line, .. }
            | Self::EmptyHeading { line, .. }
            | Self::UnmatchedMarker { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedCodeFence {
                line,
                language: Some(language),
            } => write!(f, "line {line}: unterminated `{language}` code fence"),
            Self::UnterminatedCodeFence {
                line,
                language: None,
            } => write!(f, "line {line}: unterminated code fence"),
            Self::EmptyHeading { line, level } => {
                write!(f, "line {line}: empty level {level} heading")
            }
            Self::UnmatchedMarker { line, marker } => {
                write!(f, "line {line}: unmatched `{marker}` left as text")
            }
        }
    }
}
