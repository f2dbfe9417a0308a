//! # Regex Utilities
//!
//! Search patterns come in two flavors:
//!
//! * Patterns the [`regex`] crate can compile; fast, linear-time.
//! * Patterns needing lookaround or backreferences, which require [`fancy_regex`].
//!
//! We'd prefer the [`regex`] crate whenever a pattern permits it:
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Engine Flags - [`RegexFlags`]
//!
//! [`RegexWrapper`] supports one scanning primitive, [`RegexWrapper::find_at`];
//! [`RegexMatches`] builds non-overlapping iteration on top of it.
//!
//! ### Concurrence Contention
//!
//! Compiled regex objects keep internal scratch buffers which threads
//! fight over in heavy parallel workloads. Searches that *may* run under
//! contention should use [`SpanFinder::pooled`](crate::SpanFinder::pooled),
//! which hands each thread its own clone.

mod regex_flags;
mod regex_matches;
mod regex_wrapper;

#[doc(inline)]
pub use regex_flags::RegexFlags;
#[doc(inline)]
pub use regex_matches::RegexMatches;
#[doc(inline)]
pub use regex_wrapper::{RegexWrapper, RegexWrapperPattern};
