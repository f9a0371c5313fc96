//! Whitespace analyzer: whitespace tokenization with no normalization.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// An analyzer that splits on whitespace and keeps case and punctuation.
#[derive(Clone, Debug)]
pub struct WhitespaceAnalyzer {
    inner: PipelineAnalyzer,
}

impl WhitespaceAnalyzer {
    pub fn new() -> Self {
        let analyzer =
            PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).with_name("whitespace");

        WhitespaceAnalyzer { inner: analyzer }
    }
}

impl Default for WhitespaceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WhitespaceAnalyzer {
    fn analyze(&self, field_name: &str, text: &str) -> Result<TokenStream> {
        self.inner.analyze(field_name, text)
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
