//! Standard analyzer: Unicode words, lowercased, English stop words removed.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;
use crate::util::simd;

/// A general purpose analyzer for prose.
///
/// Splits on Unicode word boundaries (so `can't` and `32.3` stay whole),
/// lowercases, then drops stop words.
#[derive(Clone)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a standard analyzer with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a standard analyzer with a custom stop word set.
    ///
    /// Stop words are matched after lowercasing, so the set is lowercased too.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        let stop_words = stop_words
            .iter()
            .map(|word| simd::ascii::to_lowercase(word))
            .collect();
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words))
    }

    /// Create a standard analyzer that keeps every word.
    pub fn without_stop_words() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard_no_stop");

        StandardAnalyzer { inner: analyzer }
    }

    fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("standard");

        StandardAnalyzer { inner: analyzer }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, field_name: &str, text: &str) -> Result<TokenStream> {
        self.inner.analyze(field_name, text)
    }

    fn name(&self) -> &str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("body", "Hello the world and test")
            .unwrap()
            .collect();

        // "the" and "and" should be filtered out
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_standard_keeps_contractions_and_numbers() {
        let analyzer = StandardAnalyzer::new();
        let texts: Vec<String> = analyzer
            .analyze("body", "Don't pay 32.3 dollars")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["don't", "pay", "32.3", "dollars"]);
    }

    #[test]
    fn test_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words();
        let count = analyzer.analyze("body", "The end").unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = ["end"].iter().map(|s| s.to_string()).collect();
        let analyzer = StandardAnalyzer::with_stop_words(stop_words);
        let texts: Vec<String> = analyzer
            .analyze("body", "The end")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["the"]);
    }

    #[test]
    fn test_custom_stop_words_any_case() {
        let stop_words = ["The", "END"].iter().map(|s| s.to_string()).collect();
        let analyzer = StandardAnalyzer::with_stop_words(stop_words);
        let texts: Vec<String> = analyzer
            .analyze("body", "the End of THE story")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["of", "story"]);
    }
}
