//! Views that reduce a token stream to a textual report.
//!
//! A view consumes one [`TokenStream`] completely and produces a
//! [`ViewOutput`]: the report text plus the number of tokens it consumed.
//! Streams are taken by value, so a stream drained by one view can never be
//! handed to another.
//!
//! # Available Views
//!
//! - [`offsets::OffsetsView`] - One line per token with its character span
//! - [`frequency::FrequencyView`] - Distinct terms in ordinal order with counts
//!
//! # Examples
//!
//! ```
//! use lexiscope::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//! use lexiscope::view::{FrequencyView, ViewReducer};
//!
//! let analyzer = SimpleAnalyzer::new();
//! let stream = analyzer.analyze("body", "to be or not to be").unwrap();
//! let output = FrequencyView::new().reduce(stream);
//!
//! assert_eq!(output.report.trim(), "be [2]   not [1]   or [1]   to [2]");
//! assert_eq!(output.token_count, 6);
//! ```

use serde::Serialize;

use crate::analysis::token::TokenStream;

pub mod frequency;
pub mod offsets;

pub use frequency::FrequencyView;
pub use offsets::OffsetsView;

/// The result of reducing one token stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ViewOutput {
    /// The report text, untrimmed
    pub report: String,

    /// Number of tokens consumed from the stream
    pub token_count: usize,
}

/// Trait for views that turn a token stream into a report.
///
/// Views keep no state between calls: everything a reduction needs is
/// allocated inside [`reduce`](Self::reduce) and dropped when it returns.
pub trait ViewReducer: Send + Sync {
    /// Display name of this view.
    fn name(&self) -> &'static str;

    /// Drain `stream` and build the report.
    fn reduce(&self, stream: TokenStream) -> ViewOutput;
}
