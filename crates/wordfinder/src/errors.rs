//! # Error Types

/// Result type for wordfinder operations.
pub type WFResult<T> = Result<T, WFError>;

/// Errors raised by document construction, offset resolution, and search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WFError {
    /// The regex pattern could not be parsed.
    #[error("invalid regex pattern {pattern:?}: {message}")]
    Pattern {
        /// The rejected pattern.
        pattern: String,

        /// The engine's parse error.
        message: String,
    },

    /// The engine cannot honour the requested flags.
    #[error("flags {flags:?} are not supported by the {engine} engine")]
    UnsupportedFlags {
        /// The rejected flags, in inline-flag notation.
        flags: String,

        /// The engine which rejected them.
        engine: &'static str,
    },

    /// A text offset outside `[0, limit]`.
    #[error("offset {offset} is out of range (limit {limit})")]
    OutOfRange {
        /// The offending offset.
        offset: usize,

        /// The largest valid offset.
        limit: usize,
    },

    /// A text interval whose start lies after its end.
    #[error("interval start {start} is after end {end}")]
    InvertedInterval {
        /// Interval start.
        start: usize,

        /// Interval end.
        end: usize,
    },

    /// An offset lookup on a document with no tokens.
    #[error("document has no tokens")]
    EmptyDocument,

    /// A token range which does not fit the document.
    #[error("token range {start}..{end} is out of bounds for {len} tokens")]
    TokenRangeOutOfBounds {
        /// Range start.
        start: usize,

        /// Range end.
        end: usize,

        /// Number of tokens in the document.
        len: usize,
    },

    /// Tokens inconsistent with the document text.
    #[error("token {index}: {reason}")]
    TokenLayout {
        /// Index of the offending token.
        index: usize,

        /// What is wrong with it.
        reason: String,
    },

    /// The engine failed while matching (e.g. a backtrack limit).
    #[error("regex engine failure: {message}")]
    Engine {
        /// The engine's error.
        message: String,
    },
}
