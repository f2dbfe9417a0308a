//! # Span Finder

use core::num::NonZeroUsize;
use std::borrow::Cow;
use std::sync::Arc;

use crate::concurrency::ThreadReplicas;
use crate::document::{DocSpan, Document, SpanRef};
use crate::errors::WFResult;
use crate::regex::{RegexFlags, RegexMatches, RegexWrapper, RegexWrapperPattern};
use crate::search::FindIter;

/// Where a finder gets the regex for the calling thread.
#[derive(Debug, Clone)]
enum RegexSource {
    Shared(Arc<RegexWrapper>),
    PerThread(Arc<ThreadReplicas<RegexWrapper>>),
}

impl RegexSource {
    fn local(&self) -> &RegexWrapper {
        match self {
            Self::Shared(regex) => regex,
            Self::PerThread(replicas) => replicas.local(),
        }
    }

    fn into_local(self) -> RegexWrapper {
        match self {
            Self::Shared(regex) => Arc::unwrap_or_clone(regex),
            Self::PerThread(replicas) => replicas.local().clone(),
        }
    }
}

/// A compiled regex search, reusable across documents and spans.
///
/// ```rust
/// use wordfinder::{Document, RegexFlags, SpanFinder, SpanRef};
///
/// let finder = SpanFinder::new(r"b\s+c", RegexFlags::default()).unwrap();
///
/// let doc = Document::from_words(&["ab", "cd"], Some(&[false, false])).unwrap();
/// assert!(finder.find_all(&doc).unwrap().is_empty());
///
/// let doc = Document::from_words(&["ab", "cd"], None).unwrap();
/// assert_eq!(finder.find_all(&doc).unwrap(), vec![SpanRef::new(0, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct SpanFinder {
    source: RegexSource,
}

impl From<RegexWrapper> for SpanFinder {
    fn from(regex: RegexWrapper) -> Self {
        Self {
            source: RegexSource::Shared(Arc::new(regex)),
        }
    }
}

impl SpanFinder {
    /// Compile a finder.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern; plain strings pick the engine adaptively.
    /// * `flags` - the engine flags.
    ///
    /// ## Returns
    /// The finder, or [`WFError::Pattern`](crate::WFError::Pattern) /
    /// [`WFError::UnsupportedFlags`](crate::WFError::UnsupportedFlags).
    pub fn new<P: Into<RegexWrapperPattern>>(
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<Self> {
        let pattern: RegexWrapperPattern = pattern.into();
        Ok(Self::from(pattern.compile_with_flags(flags)?))
    }

    /// Compile a finder for use from many threads at once.
    ///
    /// Each thread searches with its own regex clone; see
    /// [`SpanFinder::per_thread`].
    pub fn pooled<P: Into<RegexWrapperPattern>>(
        pattern: P,
        flags: RegexFlags,
    ) -> WFResult<Self> {
        let pattern: RegexWrapperPattern = pattern.into();
        Ok(Self::per_thread(pattern.compile_with_flags(flags)?, None))
    }

    /// Build a finder holding one clone of `regex` per hardware thread.
    ///
    /// ## Arguments
    /// * `regex` - the compiled regex.
    /// * `limit` - optional cap on the number of clones.
    pub fn per_thread(
        regex: RegexWrapper,
        limit: Option<NonZeroUsize>,
    ) -> Self {
        let replicas = ThreadReplicas::new(regex, limit);
        log::debug!(
            "replicating {} regex {:?} x{}",
            replicas.local().engine(),
            replicas.local().as_str(),
            replicas.count()
        );
        Self {
            source: RegexSource::PerThread(Arc::new(replicas)),
        }
    }

    /// The regex the current thread searches with.
    pub fn regex(&self) -> &RegexWrapper {
        self.source.local()
    }

    /// The number of regex clones this finder spreads threads over.
    pub fn replicas(&self) -> usize {
        match &self.source {
            RegexSource::Shared(_) => 1,
            RegexSource::PerThread(replicas) => replicas.count(),
        }
    }

    /// Lazily search the whole text of `doc`.
    pub fn find_iter<'a>(
        &'a self,
        doc: &'a Document,
    ) -> FindIter<'a> {
        search_document(Cow::Borrowed(self.regex()), doc)
    }

    /// Lazily search the whole text of `doc`, consuming the finder.
    ///
    /// The iterator owns the regex, so it may outlive the finder.
    pub fn into_find_iter(
        self,
        doc: &Document,
    ) -> FindIter<'_> {
        search_document(Cow::Owned(self.source.into_local()), doc)
    }

    /// Search the whole text of `doc`, collecting every match in text order.
    pub fn find_all(
        &self,
        doc: &Document,
    ) -> WFResult<Vec<SpanRef>> {
        self.find_iter(doc).collect()
    }

    /// Lazily search the text covered by `span`.
    ///
    /// The engine sees only [`DocSpan::text`]; anchors and word boundaries
    /// apply at its edges. Results are in document token coordinates.
    pub fn find_iter_in<'a>(
        &'a self,
        span: DocSpan<'a>,
    ) -> FindIter<'a> {
        search_span(Cow::Borrowed(self.regex()), span)
    }

    /// Lazily search the text covered by `span`, consuming the finder.
    pub fn into_find_iter_in(
        self,
        span: DocSpan<'_>,
    ) -> FindIter<'_> {
        search_span(Cow::Owned(self.source.into_local()), span)
    }

    /// Search the text covered by `span`, collecting every match in text order.
    pub fn find_all_in(
        &self,
        span: DocSpan<'_>,
    ) -> WFResult<Vec<SpanRef>> {
        self.find_iter_in(span).collect()
    }

    /// Search many documents.
    ///
    /// Runs in parallel under the `rayon` feature; build the finder with
    /// [`SpanFinder::pooled`] to avoid regex contention.
    ///
    /// ## Returns
    /// One result per document, in input order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn find_all_batch(
        &self,
        docs: &[Document],
    ) -> Vec<WFResult<Vec<SpanRef>>> {
        log::debug!("searching batch of {} documents", docs.len());
        map_documents(docs, |doc| self.find_all(doc))
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn search_document<'a>(
    regex: Cow<'a, RegexWrapper>,
    doc: &'a Document,
) -> FindIter<'a> {
    log::trace!("searching document of {} tokens", doc.len());
    FindIter::new(doc, RegexMatches::new(regex, doc.text()), 0)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn search_span<'a>(
    regex: Cow<'a, RegexWrapper>,
    span: DocSpan<'a>,
) -> FindIter<'a> {
    log::trace!("searching span {:?}", span.span_ref());
    FindIter::new(
        span.doc(),
        RegexMatches::new(regex, span.text()),
        span.char_range().start,
    )
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        fn map_documents<F, R>(
            docs: &[Document],
            f: F,
        ) -> Vec<R>
        where
            F: Fn(&Document) -> R + Sync + Send,
            R: Send,
        {
            use rayon::prelude::*;
            docs.par_iter().map(f).collect()
        }
    } else {
        fn map_documents<F, R>(
            docs: &[Document],
            f: F,
        ) -> Vec<R>
        where
            F: Fn(&Document) -> R,
        {
            docs.iter().map(f).collect()
        }
    }
}
