//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{CharOffsets, Tokenizer};

use crate::analysis::token::{Token, TokenStream};
use crate::error::{LexiscopeError, Result};

/// The pattern used by [`RegexTokenizer::new`].
pub const DEFAULT_PATTERN: &str = r"\w+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(compile(pattern)?),
            gaps: true,
        })
    }

    /// Byte ranges of the tokens in `text`, in document order.
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        if !self.gaps {
            return self
                .pattern
                .find_iter(text)
                .filter(|mat| !mat.is_empty())
                .map(|mat| (mat.start(), mat.end()))
                .collect();
        }

        let mut spans = Vec::new();
        let mut last_end = 0;
        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                spans.push((last_end, mat.start()));
            }
            last_end = mat.end();
        }
        if last_end < text.len() {
            spans.push((last_end, text.len()));
        }
        spans
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| LexiscopeError::analysis(format!("Invalid regex pattern: {e}")))
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut offsets = CharOffsets::new(text);

        let tokens: Vec<Token> = self
            .spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                let start_offset = offsets.char_offset(start);
                let end_offset = offsets.char_offset(end);
                Token::with_offsets(&text[start..end], position, start_offset, end_offset)
            })
            .collect();

        Ok(TokenStream::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
