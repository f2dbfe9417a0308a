//! # Document Span View

use core::ops::Range;

use crate::document::{Document, SpanRef, Token};
use crate::errors::{WFError, WFResult};

/// A [`SpanRef`] bound to its [`Document`].
///
/// The view is validated on construction: `start <= end <= doc.len()`.
#[derive(Debug, Clone, Copy)]
pub struct DocSpan<'d> {
    doc: &'d Document,
    span: SpanRef,
}

impl<'d> DocSpan<'d> {
    /// Bind `span` to `doc`.
    ///
    /// ## Returns
    /// The view, or [`WFError::TokenRangeOutOfBounds`] if the span does not fit.
    pub fn new(
        doc: &'d Document,
        span: SpanRef,
    ) -> WFResult<Self> {
        if span.start > span.end || span.end > doc.len() {
            return Err(WFError::TokenRangeOutOfBounds {
                start: span.start,
                end: span.end,
                len: doc.len(),
            });
        }
        Ok(Self { doc, span })
    }

    /// A view over every token of `doc`.
    pub fn full(doc: &'d Document) -> Self {
        Self {
            doc,
            span: SpanRef::new(0, doc.len()),
        }
    }

    /// The owning document.
    pub fn doc(&self) -> &'d Document {
        self.doc
    }

    /// The token range.
    pub fn span_ref(&self) -> SpanRef {
        self.span
    }

    /// Index of the first token.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Index one past the last token.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Does the view cover no tokens?
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The covered tokens.
    pub fn tokens(&self) -> &'d [Token] {
        &self.doc.tokens()[self.span.range()]
    }

    /// The text range from the first token's start to the last token's end.
    ///
    /// An empty view is the empty range at its anchor token's start,
    /// or at the end of the text when anchored past the last token.
    pub fn char_range(&self) -> Range<usize> {
        match self.tokens() {
            [] => {
                let at = self
                    .doc
                    .token(self.span.start)
                    .map_or(self.doc.text().len(), Token::char_start);
                at..at
            }
            [first, .., last] => first.char_start()..last.char_end(),
            [only] => only.char_range(),
        }
    }

    /// The union of the covered tokens' extents.
    ///
    /// Like [`DocSpan::char_range`], but including the gap after the last
    /// token (and, for spans starting at token `0`, any text before it).
    /// See [`Document::token_extent`].
    pub fn extent(&self) -> Range<usize> {
        if self.is_empty() {
            return self.char_range();
        }
        let first = self.doc.token_extent(self.span.start);
        let last = self.doc.token_extent(self.span.end - 1);
        match (first, last) {
            (Some(first), Some(last)) => first.start..last.end,
            _ => self.char_range(),
        }
    }

    /// The document text covered by the tokens, including inner whitespace.
    ///
    /// Whitespace after the last token is excluded.
    pub fn text(&self) -> &'d str {
        &self.doc.text()[self.char_range()]
    }

    /// The document text covered by [`DocSpan::extent`].
    pub fn text_with_ws(&self) -> &'d str {
        &self.doc.text()[self.extent()]
    }
}

impl PartialEq for DocSpan<'_> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        core::ptr::eq(self.doc, other.doc) && self.span == other.span
    }
}

impl Eq for DocSpan<'_> {}
