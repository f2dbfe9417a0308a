//! # Offset Index

use crate::document::{Document, Token};
use crate::errors::{WFError, WFResult};

/// Dense `text offset -> token index` table for one [`Document`].
///
/// Covers every offset in `0..=text.len()`:
/// * an offset inside a token maps to that token;
/// * an offset in a gap maps to the token before the gap;
/// * an offset before the first token maps to token `0`.
///
/// A document with no tokens has an empty index, and every lookup on it
/// fails with [`WFError::EmptyDocument`].
///
/// Building is `O(text.len())` in time and space; lookups are `O(1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetIndex {
    token_indices: Vec<usize>,
}

impl OffsetIndex {
    /// Build the index for `doc`.
    ///
    /// Prefer [`Document::offset_index`], which caches the result.
    pub fn build(doc: &Document) -> Self {
        Self::from_tokens(doc.tokens(), doc.text().len())
    }

    /// Build an index over `tokens`, covering offsets `0..=text_len`.
    ///
    /// `tokens` must have strictly increasing starts, all `<= text_len`;
    /// [`Document::new`] guarantees this.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
    pub fn from_tokens(
        tokens: &[Token],
        text_len: usize,
    ) -> Self {
        if tokens.is_empty() {
            return Self {
                token_indices: Vec::new(),
            };
        }

        let mut starts = tokens.iter().map(Token::char_start).enumerate().peekable();

        let mut current = 0;
        let mut token_indices = Vec::with_capacity(text_len + 1);
        for offset in 0..=text_len {
            if let Some((index, _)) = starts.next_if(|&(_, start)| start == offset) {
                current = index;
            }
            token_indices.push(current);
        }

        log::debug!(
            "built offset index: {} tokens over {} bytes",
            tokens.len(),
            text_len
        );

        Self { token_indices }
    }

    /// The token index owning `offset`.
    ///
    /// ## Returns
    /// * [`WFError::EmptyDocument`] if the document has no tokens;
    /// * [`WFError::OutOfRange`] if `offset` is past the end of the text;
    /// * otherwise, the token index.
    pub fn lookup(
        &self,
        offset: usize,
    ) -> WFResult<usize> {
        if self.token_indices.is_empty() {
            return Err(WFError::EmptyDocument);
        }
        self.token_indices
            .get(offset)
            .copied()
            .ok_or(WFError::OutOfRange {
                offset,
                limit: self.token_indices.len() - 1,
            })
    }

    /// Number of indexed offsets; `text.len() + 1`, or `0` when empty.
    pub fn len(&self) -> usize {
        self.token_indices.len()
    }

    /// Is the index empty (no tokens)?
    pub fn is_empty(&self) -> bool {
        self.token_indices.is_empty()
    }

    /// The raw table.
    pub fn as_slice(&self) -> &[usize] {
        &self.token_indices
    }
}
