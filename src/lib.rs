//! # Lexiscope
//!
//! Inspect how a text analysis pipeline segments and normalizes a document.
//!
//! A document is run through an [`Analyzer`](analysis::analyzer::Analyzer)
//! and the resulting token stream is reduced by a view:
//!
//! - the offsets view lists every token with its character span
//! - the frequency view lists every distinct term with its count
//!
//! ```
//! use lexiscope::session::AnalysisSession;
//!
//! let mut session = AnalysisSession::with_defaults();
//! session.load_text("Hello world");
//!
//! let report = session.run_offsets_report().unwrap();
//! assert!(report.starts_with("hello   Start:     0  End:     5"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod util;
pub mod view;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, SimpleAnalyzer};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::config::{AnalyzerKind, SessionConfig};
    pub use crate::error::{LexiscopeError, Result};
    pub use crate::session::{AnalysisSession, AnalyzerInfo};
    pub use crate::view::{FrequencyView, OffsetsView, ViewOutput, ViewReducer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
