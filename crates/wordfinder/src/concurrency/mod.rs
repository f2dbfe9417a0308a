//! # Concurrency Support

mod thread_replicas;

#[doc(inline)]
pub use thread_replicas::*;
