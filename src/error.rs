//! Error types for the Lexiscope library.
//!
//! All errors are represented by the [`LexiscopeError`] enum. An empty input
//! document is never an error: it simply analyzes to zero tokens.
//!
//! # Examples
//!
//! ```
//! use lexiscope::error::{LexiscopeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiscopeError::config("field name must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Lexiscope operations.
#[derive(Error, Debug)]
pub enum LexiscopeError {
    /// I/O errors not tied to a specific input document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document could not be read
    #[error("Input unavailable: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No analyzer is registered for the requested slot or name
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// No view is registered for the requested slot or name
    #[error("View unavailable: {0}")]
    ViewUnavailable(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexiscopeError.
pub type Result<T> = std::result::Result<T, LexiscopeError>;

impl LexiscopeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexiscopeError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexiscopeError::Config(msg.into())
    }

    /// Create a new analyzer-unavailable error.
    pub fn analyzer_unavailable<S: Into<String>>(msg: S) -> Self {
        LexiscopeError::AnalyzerUnavailable(msg.into())
    }

    /// Create a new view-unavailable error.
    pub fn view_unavailable<S: Into<String>>(msg: S) -> Self {
        LexiscopeError::ViewUnavailable(msg.into())
    }

    /// Create an input-unavailable error for the given path.
    pub fn input_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        LexiscopeError::InputUnavailable {
            path: path.into(),
            source,
        }
    }
}
