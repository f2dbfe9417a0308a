//! # Span Resolver

use crate::document::SpanRef;
use crate::errors::{WFError, WFResult};
use crate::offsets::OffsetIndex;

/// Resolve the text interval `[start, end)` to the minimal covering token span.
///
/// * A zero-width interval resolves to the empty span anchored at the token
///   owning `start`; `end - 1` is never consulted.
/// * Otherwise the span runs from the token owning `start` through
///   the token owning `end - 1`, the last included byte.
///
/// The span may be wider than the interval (token granularity), never narrower.
///
/// ## Returns
/// The span; [`WFError::InvertedInterval`] if `start > end`;
/// or the [`OffsetIndex::lookup`] error for an offset it cannot map.
pub fn resolve_span(
    index: &OffsetIndex,
    start: usize,
    end: usize,
) -> WFResult<SpanRef> {
    if start > end {
        return Err(WFError::InvertedInterval { start, end });
    }

    let first = index.lookup(start)?;
    if start == end {
        return Ok(SpanRef::empty(first));
    }

    let last = index.lookup(end - 1)?;
    Ok(SpanRef::new(first, last + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Token};

    fn ab_cd() -> Document {
        Document::new("ab  cd", vec![Token::new(0, "ab"), Token::new(4, "cd")]).unwrap()
    }

    #[test]
    fn test_resolve() {
        let doc = ab_cd();
        let index = doc.offset_index();

        assert_eq!(resolve_span(index, 1, 5), Ok(SpanRef::new(0, 2)));
        assert_eq!(resolve_span(index, 0, 2), Ok(SpanRef::new(0, 1)));
        // Trailing gap belongs to the preceding token.
        assert_eq!(resolve_span(index, 0, 4), Ok(SpanRef::new(0, 1)));
        assert_eq!(resolve_span(index, 3, 6), Ok(SpanRef::new(0, 2)));
        assert_eq!(resolve_span(index, 4, 6), Ok(SpanRef::new(1, 2)));
    }

    #[test]
    fn test_zero_width() {
        let doc = ab_cd();
        let index = doc.offset_index();

        assert_eq!(resolve_span(index, 0, 0), Ok(SpanRef::empty(0)));
        assert_eq!(resolve_span(index, 2, 2), Ok(SpanRef::empty(0)));
        assert_eq!(resolve_span(index, 4, 4), Ok(SpanRef::empty(1)));
        assert_eq!(resolve_span(index, 6, 6), Ok(SpanRef::empty(1)));
    }

    #[test]
    fn test_errors() {
        let doc = ab_cd();
        let index = doc.offset_index();

        assert_eq!(
            resolve_span(index, 3, 2),
            Err(WFError::InvertedInterval { start: 3, end: 2 })
        );
        assert_eq!(
            resolve_span(index, 5, 8),
            Err(WFError::OutOfRange {
                offset: 7,
                limit: 6
            })
        );
        assert_eq!(
            resolve_span(index, 7, 7),
            Err(WFError::OutOfRange {
                offset: 7,
                limit: 6
            })
        );
        assert_eq!(
            resolve_span(&OffsetIndex::from_tokens(&[], 0), 0, 0),
            Err(WFError::EmptyDocument)
        );
    }
}
