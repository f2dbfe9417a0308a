//! # Range Compatibility Helpers

pub mod ranges;
