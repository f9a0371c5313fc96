//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the units that flow from an analyzer into the views.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with its text and character offsets
//! - [`TokenStream`] - A single-pass, fused iterator of tokens
//!
//! # Offsets
//!
//! Offsets count characters (Unicode scalar values), not bytes, from the start
//! of the analyzed text. The span `start_offset..end_offset` always refers to
//! the original text, even after a filter has rewritten the token text.
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The (normalized) text content of the token
    pub text: String,

    /// The position of the token in its token stream (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        debug_assert!(start_offset <= end_offset);
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Replace the text of this token, keeping its position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
///
/// A stream is consumed exactly once. Once it has returned `None`, every
/// subsequent call to `next` returns `None` as well; to analyze the same text
/// again, ask the analyzer for a new stream.
pub struct TokenStream {
    inner: Fuse<Box<dyn Iterator<Item = Token> + Send>>,
}

impl TokenStream {
    /// Wrap any token iterator into a stream.
    pub fn new<I>(tokens: I) -> Self
    where
        I: Iterator<Item = Token> + Send + 'static,
    {
        let boxed: Box<dyn Iterator<Item = Token> + Send> = Box::new(tokens);
        TokenStream {
            inner: boxed.fuse(),
        }
    }

    /// A stream that yields no tokens.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for TokenStream {}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream").finish_non_exhaustive()
    }
}

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        TokenStream::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_with_text_keeps_offsets() {
        let token = Token::with_offsets("Hello", 0, 0, 5).with_text("hello");
        assert_eq!(token.text, "hello");
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }

    #[test]
    fn test_token_stream_stays_at_end() {
        // An iterator that would restart after returning None.
        let mut toggle = false;
        let flaky = std::iter::from_fn(move || {
            toggle = !toggle;
            if toggle { None } else { Some(Token::new("ghost", 0)) }
        });

        let mut stream = TokenStream::new(flaky);
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = TokenStream::empty();
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }
}
