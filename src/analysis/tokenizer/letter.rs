//! Letter tokenizer implementation.

use std::sync::LazyLock;

use regex::Regex;

use super::{CharOffsets, Tokenizer};

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Maximal runs of characters in the Unicode general category L.
static LETTER_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("letter pattern is valid"));

/// A tokenizer that emits maximal runs of letters.
///
/// A letter is a character of Unicode general category L. Everything else
/// separates tokens and never appears inside one, including digits, letter
/// numbers such as `Ⅻ`, symbols such as `Ⓐ` and combining marks.
#[derive(Clone, Debug, Default)]
pub struct LetterTokenizer;

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Self {
        LetterTokenizer
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut offsets = CharOffsets::new(text);

        let tokens: Vec<Token> = LETTER_RUNS
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                let start_offset = offsets.char_offset(mat.start());
                let end_offset = offsets.char_offset(mat.end());
                Token::with_offsets(mat.as_str(), position, start_offset, end_offset)
            })
            .collect();

        Ok(TokenStream::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_tokenizer() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_digits_are_separators() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a1b 2c").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (2, 3));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (5, 6));
    }

    #[test]
    fn test_empty_and_separator_only() {
        let tokenizer = LetterTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" 42, !? \n").unwrap().count(), 0);
    }

    #[test]
    fn test_unicode_letters() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("café-crème").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[1].text, "crème");
        assert_eq!(tokens[1].start_offset, 5);
        assert_eq!(tokens[1].end_offset, 10);
    }

    #[test]
    fn test_only_letter_category_counts() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Chapter Ⅻ Ⓐ x").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Chapter", "x"]);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (12, 13));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_combining_mark_separates() {
        // U+0301 COMBINING ACUTE ACCENT is category Mn, not L.
        let tokenizer = LetterTokenizer::new();
        let texts: Vec<String> = tokenizer
            .tokenize("cafe\u{301}s")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["cafe", "s"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(LetterTokenizer::new().name(), "letter");
    }
}
