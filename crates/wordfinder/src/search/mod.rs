//! # Regex Search
//!
//! Four operations, lazy and eager, at document and sub-range granularity:
//!
//! | granularity | lazy                   | eager                 |
//! |-------------|------------------------|-----------------------|
//! | document    | [`Document::finditer`] | [`Document::findall`] |
//! | sub-range   | [`DocSpan::finditer`]  | [`DocSpan::findall`]  |
//!
//! Each compiles its pattern before scanning, then resolves every match to
//! a [`SpanRef`](crate::SpanRef) in absolute document token coordinates.
//! [`SpanFinder`] holds a compiled pattern for reuse across many documents.
//!
//! [`Document::finditer`]: crate::Document::finditer
//! [`Document::findall`]: crate::Document::findall
//! [`DocSpan::finditer`]: crate::DocSpan::finditer
//! [`DocSpan::findall`]: crate::DocSpan::findall

mod doc_search;
mod find_iter;
mod span_finder;

#[doc(inline)]
pub use find_iter::*;
#[doc(inline)]
pub use span_finder::*;
