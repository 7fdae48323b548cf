//! Compact range representation for zero-copy text references.
//!
//! Block and inline events refer back into the input with `u32` offsets
//! instead of owning copies of each line.

/// Byte range into an input string.
///
/// Ranges produced by the parsers always start and end on ASCII
/// boundaries (markers, whitespace, newlines), so slicing a `str` with
/// them never splits a multi-byte character.
///
/// # Example
/// ```
/// use livemark::Range;
///
/// let input = "- item";
/// let range = Range::new(2, 6);
/// assert_eq!(range.slice(input), "item");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The text this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start as usize..self.end as usize]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both ends forward by `base` bytes.
    ///
    /// Used to turn line-relative ranges into input-relative ones.
    #[inline]
    pub const fn offset(self, base: u32) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let input = "## Title";
        assert_eq!(Range::new(3, 8).slice(input), "Title");
    }

    #[test]
    fn test_empty() {
        let r = Range::new(4, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.slice("abcdef"), "");
    }

    #[test]
    fn test_offset() {
        let r = Range::from_usize(2, 5).offset(10);
        assert_eq!(r, Range::new(12, 15));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_slice_multibyte_neighbours() {
        let input = "> ação";
        assert_eq!(Range::from_usize(2, input.len()).slice(input), "ação");
    }
}
