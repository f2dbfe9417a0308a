//! # Document

use core::ops::Range;
use std::sync::OnceLock;

use crate::document::{DocSpan, SpanRef, Token};
use crate::errors::{WFError, WFResult};
use crate::offsets::{OffsetIndex, resolve_span};

/// A tokenized document.
///
/// Owns the full text and an ordered token sequence laid over it.
/// Tokens have strictly increasing, non-overlapping offsets;
/// gaps (usually whitespace) between them are expected.
///
/// A document is immutable once built. Its [`OffsetIndex`] is computed on
/// the first offset lookup and retained for the document's lifetime.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    offset_index: OnceLock<OffsetIndex>,
}

impl Document {
    /// Build a document from its text and tokens.
    ///
    /// ## Arguments
    /// * `text` - the full document text.
    /// * `tokens` - the tokens, in text order.
    ///
    /// ## Returns
    /// The document, or [`WFError::TokenLayout`] if a token does not lie on the text
    /// at its offset, or is out of order.
    pub fn new<S: Into<String>>(
        text: S,
        tokens: Vec<Token>,
    ) -> WFResult<Self> {
        let text = text.into();
        check_layout(&text, &tokens)?;

        Ok(Self {
            text,
            tokens,
            offset_index: OnceLock::new(),
        })
    }

    /// Build a document from words and trailing-space flags.
    ///
    /// The text is the concatenation of each word, followed by a single space
    /// where its flag is set.
    ///
    /// ## Arguments
    /// * `words` - the token texts.
    /// * `spaces` - per-word trailing-space flags; all `true` when `None`.
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        spaces: Option<&[bool]>,
    ) -> WFResult<Self> {
        if let Some(spaces) = spaces
            && spaces.len() != words.len()
        {
            return Err(WFError::TokenLayout {
                index: words.len().min(spaces.len()),
                reason: format!("{} words but {} space flags", words.len(), spaces.len()),
            });
        }

        let mut text = String::new();
        let mut tokens = Vec::with_capacity(words.len());
        for (idx, word) in words.iter().enumerate() {
            let word = word.as_ref();
            tokens.push(Token::new(text.len(), word));
            text.push_str(word);
            if spaces.is_none_or(|spaces| spaces[idx]) {
                text.push(' ');
            }
        }

        Self::new(text, tokens)
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens, in text order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get a token by index.
    pub fn token(
        &self,
        index: usize,
    ) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Does the document have no tokens?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The offsets owned by token `index`.
    ///
    /// A token owns its own text and the gap after it, up to the next token's
    /// start; the last token's gap runs to the end of the text. Token `0` also
    /// owns any text before it.
    ///
    /// These are exactly the offsets [`OffsetIndex::lookup`] maps to `index`,
    /// except that the final extent excludes the `text().len()` end offset.
    pub fn token_extent(
        &self,
        index: usize,
    ) -> Option<Range<usize>> {
        let token = self.tokens.get(index)?;
        let start = if index == 0 { 0 } else { token.char_start() };
        let end = self
            .tokens
            .get(index + 1)
            .map_or(self.text.len(), Token::char_start);
        Some(start..end)
    }

    /// Get the offset index, building and caching it on first use.
    ///
    /// Safe to call from many threads; the index is built once.
    pub fn offset_index(&self) -> &OffsetIndex {
        self.offset_index.get_or_init(|| OffsetIndex::build(self))
    }

    /// Has the offset index been built yet?
    pub fn is_indexed(&self) -> bool {
        self.offset_index.get().is_some()
    }

    /// The index of the token owning `offset`.
    pub fn token_index_at(
        &self,
        offset: usize,
    ) -> WFResult<usize> {
        self.offset_index().lookup(offset)
    }

    /// The token owning `offset`.
    pub fn token_at(
        &self,
        offset: usize,
    ) -> WFResult<&Token> {
        let index = self.token_index_at(offset)?;
        Ok(&self.tokens[index])
    }

    /// Resolve the text interval `[start, end)` to the minimal covering token span.
    ///
    /// See [`resolve_span`].
    pub fn resolve_span(
        &self,
        start: usize,
        end: usize,
    ) -> WFResult<SpanRef> {
        resolve_span(self.offset_index(), start, end)
    }

    /// View the tokens `range` as a [`DocSpan`].
    pub fn span(
        &self,
        range: Range<usize>,
    ) -> WFResult<DocSpan<'_>> {
        self.view(range.into())
    }

    /// Bind a [`SpanRef`] to this document.
    ///
    /// ## Returns
    /// The view, or [`WFError::TokenRangeOutOfBounds`] if the span does not fit.
    pub fn view(
        &self,
        span: SpanRef,
    ) -> WFResult<DocSpan<'_>> {
        DocSpan::new(self, span)
    }

    /// A [`DocSpan`] over every token.
    pub fn as_span(&self) -> DocSpan<'_> {
        DocSpan::full(self)
    }
}

fn check_layout(
    text: &str,
    tokens: &[Token],
) -> WFResult<()> {
    let mut prev: Option<&Token> = None;
    for (index, token) in tokens.iter().enumerate() {
        let layout_error = |reason: String| WFError::TokenLayout { index, reason };

        if let Some(prev) = prev {
            if token.char_start() <= prev.char_start() {
                return Err(layout_error(format!(
                    "start {} does not follow previous start {}",
                    token.char_start(),
                    prev.char_start()
                )));
            }
            if token.char_start() < prev.char_end() {
                return Err(layout_error(format!(
                    "start {} overlaps previous token ending at {}",
                    token.char_start(),
                    prev.char_end()
                )));
            }
        }

        match text.get(token.char_range()) {
            None => {
                return Err(layout_error(format!(
                    "range {:?} is not a char range of the {}-byte text",
                    token.char_range(),
                    text.len()
                )));
            }
            Some(found) if found != token.text() => {
                return Err(layout_error(format!(
                    "text {:?} does not match document text {:?}",
                    token.text(),
                    found
                )));
            }
            Some(_) => {}
        }

        prev = Some(token);
    }
    Ok(())
}
