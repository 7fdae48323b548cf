//! Bold and italic resolution.
//!
//! Two ordered passes over the free stars (not in code, not yet paired),
//! both leftmost and non-greedy, and both allowing empty content:
//!
//! 1. Bold: the leftmost pair of adjacent stars opens; the first later
//!    pair of adjacent stars closes.
//! 2. Italic: the leftmost remaining star opens; the next remaining star
//!    closes.
//!
//! Running bold first means a `**` is never consumed as two single
//! markers. If an opener finds no closer, no later opener can either,
//! so each pass stops there.
//!
//! An italic pair must not cross a bold boundary. Both stars have to
//! sit inside the same bold span, or both outside every bold span. The
//! one exception is a closer that directly follows a bold closer, as in
//! `***a***`: the italic span then ends just inside the bold one. Any
//! other crossing pair leaves the opener literal.

use smallvec::SmallVec;

use super::marks::{flags, Mark};

/// Resolve `**bold**` spans. Returns the number of spans matched.
pub fn resolve_strong(marks: &mut [Mark]) -> usize {
    let len = marks.len();
    let mut matched = 0;
    let mut i = 0;

    while i + 1 < len {
        if !is_star_pair(marks, i) {
            i += 1;
            continue;
        }

        let Some(j) = (i + 2..len - 1).find(|&j| is_star_pair(marks, j)) else {
            break;
        };

        marks[i].resolve(flags::OPENER | flags::STRONG);
        marks[i + 1].resolve(flags::OPENER | flags::STRONG | flags::CONTINUATION);
        marks[j].resolve(flags::CLOSER | flags::STRONG);
        marks[j + 1].resolve(flags::CLOSER | flags::STRONG | flags::CONTINUATION);
        matched += 1;

        i = j + 2;
    }

    matched
}

/// Resolve `*italic*` spans among the stars bold left behind.
/// Returns the number of spans matched.
pub fn resolve_emphasis(marks: &mut [Mark]) -> usize {
    let enclosing = enclosing_strong(marks);
    let len = marks.len();
    let mut matched = 0;
    let mut i = 0;

    while i < len {
        if !marks[i].is_free_star() {
            i += 1;
            continue;
        }

        let Some(j) = (i + 1..len).find(|&j| marks[j].is_free_star()) else {
            break;
        };

        match (enclosing[i], enclosing[j]) {
            (a, b) if a == b => {
                marks[i].resolve(flags::OPENER);
                marks[j].resolve(flags::CLOSER);
            }
            (Some(closer), None) if marks[j].pos == marks[closer].pos + 2 => {
                // The bold closer emits the italic end; this star is absorbed.
                marks[i].resolve(flags::OPENER);
                marks[j].resolve(flags::CLOSER | flags::CONTINUATION);
                marks[closer].flags |= flags::WRAPS_EMPHASIS;
            }
            _ => {
                i = j;
                continue;
            }
        }
        matched += 1;

        i = j + 1;
    }

    matched
}

/// For every mark, the index of the first closing star of the bold span
/// that contains it, or `None` outside bold.
fn enclosing_strong(marks: &[Mark]) -> SmallVec<[Option<usize>; 32]> {
    let mut enclosing: SmallVec<[Option<usize>; 32]> = SmallVec::from_elem(None, marks.len());
    let mut current = None;

    for (idx, mark) in marks.iter().enumerate().rev() {
        let strong = mark.flags & flags::STRONG != 0 && mark.flags & flags::CONTINUATION == 0;
        if strong && mark.flags & flags::CLOSER != 0 {
            current = Some(idx);
        } else if strong && mark.flags & flags::OPENER != 0 {
            current = None;
        } else {
            enclosing[idx] = current;
        }
    }

    enclosing
}

/// Two free stars at `i` and `i + 1`, byte-adjacent.
#[inline]
fn is_star_pair(marks: &[Mark], i: usize) -> bool {
    marks[i].is_free_star()
        && marks[i + 1].is_free_star()
        && marks[i + 1].pos == marks[i].pos + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::marks::{collect_marks, MarkBuffer};

    fn marks(text: &[u8]) -> MarkBuffer {
        let mut buffer = MarkBuffer::new();
        collect_marks(text, &mut buffer);
        buffer
    }

    fn roles(buffer: &MarkBuffer) -> Vec<u8> {
        buffer.marks().iter().map(|m| m.flags).collect()
    }

    fn resolve(text: &[u8]) -> (usize, usize, MarkBuffer) {
        let mut buffer = marks(text);
        let strong = resolve_strong(buffer.marks_mut());
        let emphasis = resolve_emphasis(buffer.marks_mut());
        (strong, emphasis, buffer)
    }

    #[test]
    fn test_simple_strong() {
        let (strong, _, buffer) = resolve(b"**a**");
        assert_eq!(strong, 1);
        assert!(buffer.marks().iter().all(|m| m.is_resolved()));
    }

    #[test]
    fn test_empty_strong() {
        let (strong, emphasis, _) = resolve(b"****");
        assert_eq!((strong, emphasis), (1, 0));
    }

    #[test]
    fn test_strong_is_non_greedy() {
        let (strong, _, _) = resolve(b"**a** b **c**");
        assert_eq!(strong, 2);
    }

    #[test]
    fn test_unclosed_strong_left_free() {
        let mut buffer = marks(b"**open");
        assert_eq!(resolve_strong(buffer.marks_mut()), 0);
        assert_eq!(roles(&buffer), vec![0, 0]);
    }

    #[test]
    fn test_simple_emphasis() {
        let (strong, emphasis, buffer) = resolve(b"*a*");
        assert_eq!((strong, emphasis), (0, 1));
        assert_eq!(
            roles(&buffer),
            vec![flags::RESOLVED | flags::OPENER, flags::RESOLVED | flags::CLOSER]
        );
    }

    #[test]
    fn test_adjacent_stars_are_empty_emphasis() {
        // "a ** b": bold has no closer, so the two stars pair as italic.
        let (strong, emphasis, _) = resolve(b"a ** b");
        assert_eq!((strong, emphasis), (0, 1));
    }

    #[test]
    fn test_unclosed_strong_becomes_empty_emphasis() {
        let (strong, emphasis, buffer) = resolve(b"**a*");
        assert_eq!((strong, emphasis), (0, 1));
        assert!(buffer.marks()[1].is_resolved());
        assert!(!buffer.marks()[2].is_resolved());
    }

    #[test]
    fn test_emphasis_around_strong() {
        let (strong, emphasis, buffer) = resolve(b"*x **y** z*");
        assert_eq!((strong, emphasis), (1, 1));
        assert!(buffer.marks().iter().all(|m| m.is_resolved()));
    }

    #[test]
    fn test_emphasis_inside_strong() {
        let (strong, emphasis, buffer) = resolve(b"**x *y* z**");
        assert_eq!((strong, emphasis), (1, 1));
        assert!(buffer.marks().iter().all(|m| m.is_resolved()));
    }

    #[test]
    fn test_triple_star_nests_emphasis_in_strong() {
        let (strong, emphasis, buffer) = resolve(b"***a***");
        assert_eq!((strong, emphasis), (1, 1));
        let marks = buffer.marks();
        assert!(marks.iter().all(|m| m.is_resolved()));
        assert_ne!(marks[3].flags & flags::WRAPS_EMPHASIS, 0);
        assert_ne!(marks[5].flags & flags::CONTINUATION, 0);
    }

    #[test]
    fn test_emphasis_never_crosses_strong() {
        // Opener inside bold, next star outside it.
        let (_, emphasis, buffer) = resolve(b"**a *b** c*");
        assert_eq!(emphasis, 0);
        assert!(!buffer.marks()[2].is_resolved());
        assert!(!buffer.marks()[5].is_resolved());

        // Opener outside bold, next star inside it.
        let (_, emphasis, _) = resolve(b"*a **b* c**");
        assert_eq!(emphasis, 0);
    }

    #[test]
    fn test_crossing_opener_hands_over_to_next_star() {
        // The star inside the first bold span is skipped; the two stars
        // after it pair up outside.
        let (_, emphasis, buffer) = resolve(b"**a *b** *c*");
        assert_eq!(emphasis, 1);
        assert!(!buffer.marks()[2].is_resolved());
        assert!(buffer.marks()[5].is_resolved());
        assert!(buffer.marks()[6].is_resolved());
    }

    #[test]
    fn test_leftover_star_after_strong() {
        // Bold takes "**" + "*a" + "**", the leftover star stays literal.
        let (strong, emphasis, buffer) = resolve(b"***a**");
        assert_eq!((strong, emphasis), (1, 0));
        assert!(!buffer.marks()[2].is_resolved());
    }

    #[test]
    fn test_stars_in_code_ignored() {
        let mut buffer = marks(b"*a*");
        for mark in buffer.marks_mut() {
            mark.flags |= flags::IN_CODE;
        }
        assert_eq!(resolve_emphasis(buffer.marks_mut()), 0);
    }
}
