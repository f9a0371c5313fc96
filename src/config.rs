//! Configuration for analysis sessions.
//!
//! A [`SessionConfig`] can be built in code, loaded from a JSON file, or
//! assembled from command line flags. Missing JSON fields take their default
//! values.
//!
//! ```json
//! {
//!   "analyzer": "standard",
//!   "field_name": "body",
//!   "stop_words": ["the", "a"]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{
    Analyzer, KeywordAnalyzer, PipelineAnalyzer, SimpleAnalyzer, StandardAnalyzer,
    WhitespaceAnalyzer,
};
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::analysis::tokenizer::regex::DEFAULT_PATTERN;
use crate::error::{LexiscopeError, Result};
use crate::session::AnalyzerInfo;

/// Field name used when none is configured.
pub const DEFAULT_FIELD_NAME: &str = "defaultFieldName";

/// The built-in analyzers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    /// Letter runs, lowercased
    #[default]
    Simple,
    /// Whitespace separated, unchanged
    Whitespace,
    /// Whole input as one token
    Keyword,
    /// Unicode words, lowercased, stop words removed
    Standard,
    /// Regular expression matches, lowercased
    Pattern,
}

impl AnalyzerKind {
    /// Every built-in analyzer, in display order.
    pub const ALL: [AnalyzerKind; 5] = [
        AnalyzerKind::Simple,
        AnalyzerKind::Whitespace,
        AnalyzerKind::Keyword,
        AnalyzerKind::Standard,
        AnalyzerKind::Pattern,
    ];

    /// Human readable analyzer name, used as the registry key.
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalyzerKind::Simple => "Simple Analyzer",
            AnalyzerKind::Whitespace => "Whitespace Analyzer",
            AnalyzerKind::Keyword => "Keyword Analyzer",
            AnalyzerKind::Standard => "Standard Analyzer",
            AnalyzerKind::Pattern => "Pattern Analyzer",
        }
    }

    /// One-line description of the analyzer.
    pub fn description(&self) -> &'static str {
        match self {
            AnalyzerKind::Simple => "An Analyzer that filters LetterTokenizer with LowerCaseFilter.",
            AnalyzerKind::Whitespace => "An Analyzer that uses WhitespaceTokenizer.",
            AnalyzerKind::Keyword => "Tokenizes the entire input as a single token.",
            AnalyzerKind::Standard => {
                "Splits on Unicode word boundaries, lowercases and removes English stop words."
            }
            AnalyzerKind::Pattern => "Emits lowercased matches of a regular expression.",
        }
    }
}

/// Configuration of an analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Analyzer registered in the session.
    pub analyzer: AnalyzerKind,

    /// Field name passed to the analyzer.
    pub field_name: String,

    /// Token pattern of the pattern analyzer.
    pub pattern: String,

    /// Emit the text between pattern matches instead of the matches.
    pub gaps: bool,

    /// Stop words of the standard analyzer, matched case-insensitively.
    /// `None` selects the English defaults.
    pub stop_words: Option<Vec<String>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerKind::Simple,
            field_name: DEFAULT_FIELD_NAME.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            gaps: false,
            stop_words: None,
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| LexiscopeError::input_unavailable(path, e))?;
        let config: SessionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no session can run with.
    pub fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(LexiscopeError::config("field_name must not be empty"));
        }
        if self.analyzer == AnalyzerKind::Pattern {
            self.pattern_tokenizer()?;
        }
        Ok(())
    }

    fn pattern_tokenizer(&self) -> Result<RegexTokenizer> {
        if self.gaps {
            RegexTokenizer::with_gaps(&self.pattern)
        } else {
            RegexTokenizer::with_pattern(&self.pattern)
        }
    }

    /// Build the configured analyzer together with its registry metadata.
    pub fn build_analyzer(&self) -> Result<AnalyzerInfo> {
        let analyzer: Arc<dyn Analyzer> = match self.analyzer {
            AnalyzerKind::Simple => Arc::new(SimpleAnalyzer::new()),
            AnalyzerKind::Whitespace => Arc::new(WhitespaceAnalyzer::new()),
            AnalyzerKind::Keyword => Arc::new(KeywordAnalyzer::new()),
            AnalyzerKind::Standard => match &self.stop_words {
                Some(words) => Arc::new(StandardAnalyzer::with_stop_words(
                    words.iter().cloned().collect(),
                )),
                None => Arc::new(StandardAnalyzer::new()),
            },
            AnalyzerKind::Pattern => {
                let tokenizer = Arc::new(self.pattern_tokenizer()?);
                Arc::new(
                    PipelineAnalyzer::new(tokenizer)
                        .add_filter(Arc::new(LowercaseFilter::new()))
                        .with_name("pattern"),
                )
            }
        };

        Ok(AnalyzerInfo::new(
            self.analyzer.display_name(),
            self.analyzer.description(),
            analyzer,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.analyzer, AnalyzerKind::Simple);
        assert_eq!(config.field_name, "defaultFieldName");
        assert_eq!(config.pattern, r"\w+");
        assert!(config.stop_words.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"analyzer": "standard"}"#).unwrap();
        assert_eq!(config.analyzer, AnalyzerKind::Standard);
        assert_eq!(config.field_name, DEFAULT_FIELD_NAME);
    }

    #[test]
    fn test_validate_rejects_empty_field_name() {
        let config = SessionConfig {
            field_name: "  ".to_string(),
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(LexiscopeError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let config = SessionConfig {
            analyzer: AnalyzerKind::Pattern,
            pattern: "[".to_string(),
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(LexiscopeError::Analysis(_))));
    }

    #[test]
    fn test_build_every_analyzer() {
        for kind in AnalyzerKind::ALL {
            let config = SessionConfig {
                analyzer: kind,
                ..SessionConfig::default()
            };
            let info = config.build_analyzer().unwrap();
            assert_eq!(info.name(), kind.display_name());
            assert_eq!(info.description(), kind.description());
        }
    }

    #[test]
    fn test_pattern_analyzer() {
        let config = SessionConfig {
            analyzer: AnalyzerKind::Pattern,
            pattern: r"[A-Za-z]+\d*".to_string(),
            ..SessionConfig::default()
        };
        let info = config.build_analyzer().unwrap();
        let texts: Vec<String> = info
            .analyzer()
            .analyze(DEFAULT_FIELD_NAME, "R2D2 and C3PO")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["r2", "d2", "and", "c3", "po"]);
    }

    #[test]
    fn test_pattern_analyzer_gaps() {
        let config: SessionConfig = serde_json::from_str(
            r#"{"analyzer": "pattern", "pattern": "[,;]\\s*", "gaps": true}"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());

        let info = config.build_analyzer().unwrap();
        let tokens: Vec<_> = info
            .analyzer()
            .analyze(DEFAULT_FIELD_NAME, "Red, green;BLUE")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["red", "green", "blue"]);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (11, 15));
    }

    #[test]
    fn test_custom_stop_words() {
        let config = SessionConfig {
            analyzer: AnalyzerKind::Standard,
            stop_words: Some(vec!["Quick".to_string()]),
            ..SessionConfig::default()
        };
        let info = config.build_analyzer().unwrap();
        let texts: Vec<String> = info
            .analyzer()
            .analyze(DEFAULT_FIELD_NAME, "the quick fox")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["the", "fox"]);
    }
}
