//! # Offset Resolution
//!
//! Regex engines report text offsets; documents are indexed by token.
//!
//! [`OffsetIndex`] is a dense, precomputed `offset -> token index` table,
//! built once per [`Document`](crate::Document);
//! [`resolve_span`] uses it to turn a matched `[start, end)` interval into
//! the minimal covering [`SpanRef`](crate::SpanRef).

mod offset_index;
mod span_resolver;

#[doc(inline)]
pub use offset_index::*;
#[doc(inline)]
pub use span_resolver::*;
