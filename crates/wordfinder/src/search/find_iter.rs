//! # Span Match Iterator

use crate::compat::ranges::offset_range;
use crate::document::{Document, SpanRef};
use crate::errors::WFResult;
use crate::regex::RegexMatches;

/// Lazy iterator of regex matches resolved to [`SpanRef`]s.
///
/// Each item is computed as the iterator advances. Matches are scanned over
/// some text of the document (the whole text, or a sub-range); each match
/// is shifted by that text's position in the document, then resolved against
/// the document's [`OffsetIndex`](crate::OffsetIndex).
///
/// The first error ends the iteration.
#[derive(Debug, Clone)]
pub struct FindIter<'a> {
    doc: &'a Document,
    matches: RegexMatches<'a>,
    shift: usize,
    done: bool,
}

impl<'a> FindIter<'a> {
    /// Resolve `matches` against `doc`.
    ///
    /// ## Arguments
    /// * `doc` - the owning document.
    /// * `matches` - matches over some slice of `doc.text()`.
    /// * `shift` - the offset of that slice in `doc.text()`.
    pub fn new(
        doc: &'a Document,
        matches: RegexMatches<'a>,
        shift: usize,
    ) -> Self {
        Self {
            doc,
            matches,
            shift,
            done: false,
        }
    }

    /// The owning document.
    pub fn doc(&self) -> &'a Document {
        self.doc
    }
}

impl Iterator for FindIter<'_> {
    type Item = WFResult<SpanRef>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.matches.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(found) => found.and_then(|found| {
                let found = offset_range(found, self.shift);
                self.doc.resolve_span(found.start, found.end)
            }),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl core::iter::FusedIterator for FindIter<'_> {}
