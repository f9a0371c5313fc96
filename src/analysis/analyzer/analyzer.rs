//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing pipeline that turns raw
//! text into the token stream consumed by the views:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → View
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//!
//! let analyzer = SimpleAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("body", "Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Implementations must be deterministic: the same field name and text always
/// produce the same tokens in the same order. The input text is never
/// modified, and empty text yields an empty stream rather than an error.
///
/// The trait requires `Send + Sync` so one analyzer can serve several
/// independent analysis sessions.
pub trait Analyzer: Send + Sync {
    /// Analyze `text` for the field `field_name` and return a fresh stream.
    ///
    /// The field name identifies the logical field being analyzed. The
    /// built-in analyzers carry it for diagnostics only.
    fn analyze(&self, field_name: &str, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
