//! Text analysis module for Lexiscope.
//!
//! This module provides tokenization, token filtering and the analyzers that
//! combine them into pipelines.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
