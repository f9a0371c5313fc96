//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split input
//! text into tokens and record where each token sits in the original text.
//!
//! # Available Tokenizers
//!
//! - [`letter::LetterTokenizer`] - Maximal runs of letters
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//! - [`whole::WholeTokenizer`] - Treats entire text as single token
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::tokenizer::Tokenizer;
//! use lexiscope::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].start_offset, 7);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared by analyzers
/// running on different threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lazily yields maximal runs of characters accepted by a predicate.
///
/// The text is owned so the resulting stream has no borrow on the caller.
pub(crate) struct CharRuns {
    text: String,
    byte_pos: usize,
    char_pos: usize,
    position: usize,
    is_token_char: fn(char) -> bool,
}

impl CharRuns {
    pub(crate) fn new(text: &str, is_token_char: fn(char) -> bool) -> Self {
        CharRuns {
            text: text.to_owned(),
            byte_pos: 0,
            char_pos: 0,
            position: 0,
            is_token_char,
        }
    }
}

impl Iterator for CharRuns {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // (byte offset, char offset) of the current run
        let mut start: Option<(usize, usize)> = None;

        for ch in self.text[self.byte_pos..].chars() {
            if (self.is_token_char)(ch) {
                if start.is_none() {
                    start = Some((self.byte_pos, self.char_pos));
                }
            } else if start.is_some() {
                break;
            }
            self.byte_pos += ch.len_utf8();
            self.char_pos += 1;
        }

        let (start_byte, start_char) = start?;
        let token = Token::with_offsets(
            &self.text[start_byte..self.byte_pos],
            self.position,
            start_char,
            self.char_pos,
        );
        self.position += 1;
        Some(token)
    }
}

/// Converts ascending byte offsets of a text into character offsets.
///
/// Offsets passed to [`CharOffsets::char_offset`] must never decrease.
pub(crate) struct CharOffsets<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> CharOffsets<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        CharOffsets {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    pub(crate) fn char_offset(&mut self, byte_offset: usize) -> usize {
        self.char_pos += self.text[self.byte_pos..byte_offset].chars().count();
        self.byte_pos = byte_offset;
        self.char_pos
    }
}

// Individual tokenizer modules
pub mod letter;
pub mod regex;
pub mod unicode_word;
pub mod whitespace;
pub mod whole;

// Re-export all tokenizers for convenient access
pub use letter::LetterTokenizer;
pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_runs_multibyte_offsets() {
        let tokens: Vec<Token> = CharRuns::new("héllo wörld", |c| !c.is_whitespace()).collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "héllo");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 5));
        assert_eq!(tokens[1].text, "wörld");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (6, 11));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_char_offsets() {
        let text = "añb c";
        let mut offsets = CharOffsets::new(text);
        assert_eq!(offsets.char_offset(0), 0);
        assert_eq!(offsets.char_offset(4), 3);
        assert_eq!(offsets.char_offset(text.len()), 5);
    }
}
