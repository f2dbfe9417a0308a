//! # wordfinder
//!
//! Regex search over tokenized documents, returning token-index spans.
//!
//! A tokenizer hands us the document text plus an ordered list of tokens,
//! each carrying its start offset. Regex engines think in text offsets;
//! document models think in token indices. This crate bridges the two:
//!
//! * [`OffsetIndex`] - a dense, lazily built, per-document table mapping
//!   every text offset to the token that owns it.
//! * [`Document::resolve_span`] - maps a half-open text interval onto the
//!   minimal covering [`SpanRef`].
//! * [`Document::finditer`] / [`Document::findall`] and
//!   [`DocSpan::finditer`] / [`DocSpan::findall`] - the four search
//!   operations, lazy and eager, at document and sub-range granularity.
//! * [`SpanFinder`] - a compiled, reusable search, including batch search.
//!
//! All offsets are UTF-8 byte offsets into [`Document::text`].
//!
//! ## Example
//!
//! ```rust
//! use wordfinder::{Document, RegexFlags, SpanRef, WFResult};
//!
//! fn example() -> WFResult<()> {
//!     let doc = Document::from_words(&["Work", "done", "with", "anxiety", ","], None)?;
//!
//!     let spans = doc.findall(r"A\w+", RegexFlags::default().with_case_insensitive(true))?;
//!     assert_eq!(spans, vec![SpanRef::new(3, 4)]);
//!     assert_eq!(doc.view(spans[0])?.text(), "anxiety");
//!
//!     // Matches may cross token boundaries and whitespace.
//!     let spans = doc.span(1..5)?.findall(r"with\s+\w+", RegexFlags::default())?;
//!     assert_eq!(spans, vec![SpanRef::new(2, 4)]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

pub mod compat;
pub mod concurrency;
pub mod document;
pub mod errors;
pub mod offsets;
pub mod regex;
pub mod search;

#[doc(inline)]
pub use document::{DocSpan, Document, SpanRef, Token};
#[doc(inline)]
pub use errors::{WFError, WFResult};
#[doc(inline)]
pub use offsets::OffsetIndex;
#[doc(inline)]
pub use crate::regex::{RegexFlags, RegexWrapper, RegexWrapperPattern};
#[doc(inline)]
pub use search::{FindIter, SpanFinder};
