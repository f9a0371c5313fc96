//! Whitespace tokenizer implementation.

use super::{CharRuns, Tokenizer};

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Punctuation and case are left untouched: `"Hello, World"` yields
/// `"Hello,"` and `"World"`.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

fn is_non_whitespace(c: char) -> bool {
    !c.is_whitespace()
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(TokenStream::new(CharRuns::new(text, is_non_whitespace)))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[2].start_offset, 13);
    }

    #[test]
    fn test_punctuation_is_kept() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello, World").unwrap().collect();

        assert_eq!(tokens[0].text, "Hello,");
        assert_eq!(tokens[0].end_offset, 6);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
