//! # Token

use core::ops::Range;

/// A token, as produced by a tokenizer.
///
/// `char_start` is the byte offset of the token's first character
/// in the document text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    char_start: usize,
    text: String,
}

impl Token {
    /// Create a token.
    ///
    /// ## Arguments
    /// * `char_start` - offset of the token in the document text.
    /// * `text` - the token text.
    pub fn new<S: Into<String>>(
        char_start: usize,
        text: S,
    ) -> Self {
        Self {
            char_start,
            text: text.into(),
        }
    }

    /// Offset of the first byte.
    pub fn char_start(&self) -> usize {
        self.char_start
    }

    /// Offset one past the last byte.
    pub fn char_end(&self) -> usize {
        self.char_start + self.text.len()
    }

    /// `char_start()..char_end()`.
    pub fn char_range(&self) -> Range<usize> {
        self.char_start..self.char_end()
    }

    /// The token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the token text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Is the token text empty?
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let token = Token::new(4, "cd");
        assert_eq!(token.char_start(), 4);
        assert_eq!(token.char_end(), 6);
        assert_eq!(token.char_range(), 4..6);
        assert_eq!(token.text(), "cd");
        assert_eq!(token.len(), 2);
        assert!(!token.is_empty());

        // Offsets are bytes.
        assert_eq!(Token::new(0, "café").char_end(), 5);
    }
}
