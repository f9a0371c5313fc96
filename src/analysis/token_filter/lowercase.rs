//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::token::{IntoTokenStream, Token};
//! use lexiscope::analysis::token_filter::Filter;
//! use lexiscope::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::simd;

/// A filter that converts tokens to lowercase.
///
/// Uses the chunked ASCII path for plain ASCII text and falls back to
/// Unicode-aware lowercasing otherwise. Offsets are preserved, so they keep
/// pointing at the original (cased) span even when lowercasing changes the
/// length of the text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(TokenStream::new(tokens.map(|token| {
            let lowered = simd::ascii::to_lowercase(&token.text);
            token.with_text(lowered)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
