//! Byte-offset spans into the expression source.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into the source text.
///
/// Spans are carried on tokens and errors so the embedding layer can point
/// at the offending text. Line and column are tracked separately by the
/// lexer, since columns count characters rather than bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create from a byte range.
    #[inline]
    pub fn from_range(range: Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }

    /// Create a zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice the source text covered by this span, if the span is in bounds.
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.to_range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
