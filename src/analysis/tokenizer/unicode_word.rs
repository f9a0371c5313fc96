//! Unicode word tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use super::{CharOffsets, Tokenizer};

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on Unicode (UAX #29) word boundaries.
///
/// Only segments containing at least one alphanumeric character become
/// tokens, so whitespace and punctuation segments are dropped.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut offsets = CharOffsets::new(text);

        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (start, word))| {
                let start_offset = offsets.char_offset(start);
                let end_offset = offsets.char_offset(start + word.len());
                Token::with_offsets(word, position, start_offset, end_offset)
            })
            .collect();

        Ok(TokenStream::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
