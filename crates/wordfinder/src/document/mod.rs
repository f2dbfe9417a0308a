//! # Tokenized Documents
//!
//! [`Document`] owns the text and its [`Token`]s;
//! [`SpanRef`] names a token range; [`DocSpan`] binds one to its document.

mod doc_span;
mod span_ref;
mod token;
mod token_document;

#[doc(inline)]
pub use doc_span::*;
#[doc(inline)]
pub use span_ref::*;
#[doc(inline)]
pub use token::*;
#[doc(inline)]
pub use token_document::*;
