//! # Span Reference

use core::ops::Range;

/// A half-open token range `[start, end)` in some [`Document`](crate::Document).
///
/// `start == end` denotes an empty span anchored at `start`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanRef {
    /// Index of the first token.
    pub start: usize,

    /// Index one past the last token.
    pub end: usize,
}

impl SpanRef {
    /// Create a span over tokens `start..end`.
    pub const fn new(
        start: usize,
        end: usize,
    ) -> Self {
        Self { start, end }
    }

    /// An empty span anchored at token `at`.
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Does the span cover no tokens?
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The token range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SpanRef {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_ref() {
        let span = SpanRef::new(1, 4);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(Range::from(span), 1..4);
        assert_eq!(SpanRef::from(1..4), span);

        let empty = SpanRef::empty(2);
        assert_eq!(empty, SpanRef::new(2, 2));
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());

        assert!(SpanRef::new(0, 2) < SpanRef::new(1, 1));
    }
}
