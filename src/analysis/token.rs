//! Token types for text analysis.
//!
//! A [`Token`] is one space-delimited word of a line, carrying its position
//! so that filters can transform text without disturbing word order. Empty
//! tokens are legal: they represent the gaps between consecutive spaces and
//! must survive the pipeline unchanged for the output to round-trip.
//!
//! # Examples
//!
//! ```
//! use typogly::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single space-delimited word within a line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token. May be empty (consecutive separators).
    pub text: String,

    /// The position of the token within its line (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the length of the token text in code points.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            position: self.position,
        }
    }
}

/// Type alias for a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_empty_token() {
        let token = Token::new("", 0);
        assert!(token.is_empty());
        assert_eq!(token.char_count(), 0);
    }

    #[test]
    fn test_char_count_multibyte() {
        let token = Token::new("łóżko", 0);
        assert_eq!(token.char_count(), 5);
        assert!(token.len() > 5); // multi-byte in UTF-8
    }

    #[test]
    fn test_with_text_keeps_position() {
        let token = Token::new("hello", 7);
        let updated = token.with_text("world");
        assert_eq!(updated.text, "world");
        assert_eq!(updated.position, 7);
    }
}
