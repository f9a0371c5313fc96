//! Simple analyzer: letter tokenization followed by lowercasing.
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//!
//! let analyzer = SimpleAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("body", "The 2 Quick-Foxes").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["the", "quick", "foxes"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::letter::LetterTokenizer;
use crate::error::Result;

/// An analyzer that splits text into runs of letters and lowercases them.
///
/// Digits, punctuation and whitespace only separate tokens. Offsets refer to
/// the original, un-lowercased text.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    inner: PipelineAnalyzer,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(LetterTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("simple");

        SimpleAnalyzer { inner: analyzer }
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, field_name: &str, text: &str) -> Result<TokenStream> {
        self.inner.analyze(field_name, text)
    }

    fn name(&self) -> &str {
        "simple"
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
