//! # Document and Span Search

use crate::document::{DocSpan, Document, SpanRef};
use crate::errors::WFResult;
use crate::regex::{RegexFlags, RegexWrapperPattern};
use crate::search::{FindIter, SpanFinder};

impl Document {
    /// Lazily search the document text.
    ///
    /// The pattern is compiled before any matching; each call starts a fresh scan.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern; plain strings pick the engine adaptively.
    /// * `flags` - the engine flags.
    ///
    /// ## Returns
    /// An iterator of [`SpanRef`]s in text order, or the compile error.
    pub fn finditer<P: Into<RegexWrapperPattern>>(
        &self,
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<FindIter<'_>> {
        Ok(SpanFinder::new(pattern, flags)?.into_find_iter(self))
    }

    /// Search the document text, collecting every match in text order.
    pub fn findall<P: Into<RegexWrapperPattern>>(
        &self,
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<Vec<SpanRef>> {
        self.finditer(pattern, flags)?.collect()
    }
}

impl<'d> DocSpan<'d> {
    /// Lazily search the text covered by this span.
    ///
    /// The engine sees only [`DocSpan::text`]; anchors and word boundaries
    /// apply at its edges. Results are in document token coordinates.
    pub fn finditer<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<FindIter<'d>> {
        Ok(SpanFinder::new(pattern, flags)?.into_find_iter_in(self))
    }

    /// Search the text covered by this span, collecting every match in text order.
    pub fn findall<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<Vec<SpanRef>> {
        self.finditer(pattern, flags)?.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Token;
    use crate::errors::WFError;

    fn ab_cd() -> Document {
        Document::new("ab  cd", vec![Token::new(0, "ab"), Token::new(4, "cd")]).unwrap()
    }

    #[test]
    fn test_document_search() {
        let doc = ab_cd();
        assert_eq!(
            doc.findall(r"b\s+c", RegexFlags::default()),
            Ok(vec![SpanRef::new(0, 2)])
        );

        let mut iter = doc.finditer(r"\w", RegexFlags::default()).unwrap();
        assert_eq!(iter.next(), Some(Ok(SpanRef::new(0, 1))));
        assert_eq!(iter.next(), Some(Ok(SpanRef::new(0, 1))));
        assert_eq!(iter.next(), Some(Ok(SpanRef::new(1, 2))));

        // A fresh call restarts the scan.
        let mut again = doc.finditer(r"\w", RegexFlags::default()).unwrap();
        assert_eq!(again.next(), Some(Ok(SpanRef::new(0, 1))));

        assert_eq!(iter.next(), Some(Ok(SpanRef::new(1, 2))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_match_in_gap() {
        let doc = ab_cd();
        let spans = doc.findall("", RegexFlags::default()).unwrap();
        // The empty match at offset 2 falls in the gap after "ab".
        assert_eq!(spans[2], SpanRef::empty(0));
    }

    #[test]
    fn test_flags_pass_through() {
        let doc = Document::from_words(&["Alpha", "beta", "ALPHA"], None).unwrap();
        assert_eq!(doc.findall("alpha", RegexFlags::default()), Ok(vec![]));
        assert_eq!(
            doc.findall("alpha", "i".parse().unwrap()),
            Ok(vec![SpanRef::new(0, 1), SpanRef::new(2, 3)])
        );
    }

    #[test]
    fn test_span_search() {
        let doc = Document::from_words(&["one", "two", "three", "two"], None).unwrap();
        let span = doc.span(1..3).unwrap();

        assert_eq!(
            span.findall("two", RegexFlags::default()),
            Ok(vec![SpanRef::new(1, 2)])
        );
        assert_eq!(
            span.findall(r"o\s+t", RegexFlags::default()),
            Ok(vec![SpanRef::new(1, 3)])
        );
        // The span text excludes the trailing space after "three".
        assert_eq!(span.findall(r"e\s", RegexFlags::default()), Ok(vec![]));

        let mut iter = span.finditer(r"\w+", RegexFlags::default()).unwrap();
        assert_eq!(iter.next(), Some(Ok(SpanRef::new(1, 2))));
        assert_eq!(iter.next(), Some(Ok(SpanRef::new(2, 3))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_engine_error_ends_iteration() {
        let text = "a".repeat(32);
        let doc = Document::new(text.clone(), vec![Token::new(0, text)]).unwrap();
        let pattern = RegexWrapperPattern::Fancy(r"(a+)+(?=b)".to_string());

        let mut iter = doc.finditer(pattern.clone(), RegexFlags::default()).unwrap();
        assert!(matches!(iter.next(), Some(Err(WFError::Engine { .. }))));
        assert_eq!(iter.next(), None);

        assert!(matches!(
            doc.findall(pattern, RegexFlags::default()),
            Err(WFError::Engine { .. })
        ));
    }

    #[test]
    fn test_pattern_errors_before_scanning() {
        let doc = ab_cd();
        assert!(matches!(
            doc.finditer("[", RegexFlags::default()),
            Err(WFError::Pattern { .. })
        ));
        assert!(matches!(
            doc.as_span().findall(
                r"(?<=a)b",
                RegexFlags::default().with_unicode(false)
            ),
            Err(WFError::UnsupportedFlags { .. })
        ));
    }
}
