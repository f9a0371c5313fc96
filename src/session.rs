//! Analysis sessions.
//!
//! An [`AnalysisSession`] owns the registered analyzers, the registered views
//! and the text being inspected. Every report asks the active analyzer for a
//! brand new token stream and moves it into exactly one view, so no stream is
//! ever shared between views.
//!
//! # Examples
//!
//! ```
//! use lexiscope::session::AnalysisSession;
//!
//! let mut session = AnalysisSession::with_defaults();
//! session.load_text("the quick Fox jumps over the lazy fox");
//!
//! let (report, count) = session.run_frequency_report().unwrap();
//! assert_eq!(report, "fox [2]   jumps [1]   lazy [1]   over [1]   quick [1]   the [2]");
//! assert_eq!(count, 8);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, SimpleAnalyzer};
use crate::config::{AnalyzerKind, DEFAULT_FIELD_NAME, SessionConfig};
use crate::error::{LexiscopeError, Result};
use crate::view::{FrequencyView, OffsetsView, ViewOutput, ViewReducer};

/// Registry slot of the offsets view in a default session.
pub const OFFSETS_VIEW: usize = 0;

/// Registry slot of the frequency view in a default session.
pub const FREQUENCY_VIEW: usize = 1;

/// A registered analyzer together with its display metadata.
#[derive(Clone)]
pub struct AnalyzerInfo {
    name: String,
    description: String,
    analyzer: Arc<dyn Analyzer>,
}

impl AnalyzerInfo {
    /// Create a new registry entry.
    pub fn new<N, D>(name: N, description: D, analyzer: Arc<dyn Analyzer>) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        AnalyzerInfo {
            name: name.into(),
            description: description.into(),
            analyzer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl fmt::Debug for AnalyzerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerInfo")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Drives registered views over the loaded text.
pub struct AnalysisSession {
    analyzers: Vec<AnalyzerInfo>,
    views: Vec<Box<dyn ViewReducer>>,
    active_analyzer: usize,
    field_name: String,
    text: String,
}

impl AnalysisSession {
    /// Create a session with nothing registered and no text loaded.
    pub fn new() -> Self {
        AnalysisSession {
            analyzers: Vec::new(),
            views: Vec::new(),
            active_analyzer: 0,
            field_name: DEFAULT_FIELD_NAME.to_string(),
            text: String::new(),
        }
    }

    /// Create a session with the simple analyzer, the offsets view in slot
    /// [`OFFSETS_VIEW`] and the frequency view in slot [`FREQUENCY_VIEW`].
    pub fn with_defaults() -> Self {
        let kind = AnalyzerKind::Simple;
        let mut session = Self::new();
        session.register_analyzer(AnalyzerInfo::new(
            kind.display_name(),
            kind.description(),
            Arc::new(SimpleAnalyzer::new()),
        ));
        session.register_default_views();
        session
    }

    /// Create a session for the analyzer and field name of `config`.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let mut session = Self::new();
        session.register_analyzer(config.build_analyzer()?);
        session.register_default_views();
        session.set_field_name(config.field_name.clone());
        Ok(session)
    }

    fn register_default_views(&mut self) {
        self.register_view(Box::new(OffsetsView::new()));
        self.register_view(Box::new(FrequencyView::new()));
    }

    /// Append an analyzer to the registry.
    ///
    /// The first analyzer registered becomes the active one.
    pub fn register_analyzer(&mut self, info: AnalyzerInfo) -> &mut Self {
        debug!("registering analyzer '{}'", info.name());
        self.analyzers.push(info);
        self
    }

    /// Append a view to the registry.
    pub fn register_view(&mut self, view: Box<dyn ViewReducer>) -> &mut Self {
        debug!("registering view '{}'", view.name());
        self.views.push(view);
        self
    }

    /// Make the analyzer registered under `name` the active one.
    pub fn select_analyzer(&mut self, name: &str) -> Result<()> {
        let index = self
            .analyzers
            .iter()
            .position(|info| info.name() == name)
            .ok_or_else(|| {
                LexiscopeError::analyzer_unavailable(format!("no analyzer named '{name}'"))
            })?;
        self.active_analyzer = index;
        Ok(())
    }

    /// The active analyzer, if one is registered.
    pub fn active_analyzer(&self) -> Option<&AnalyzerInfo> {
        self.analyzers.get(self.active_analyzer)
    }

    pub fn analyzers(&self) -> &[AnalyzerInfo] {
        &self.analyzers
    }

    pub fn views(&self) -> &[Box<dyn ViewReducer>] {
        &self.views
    }

    pub fn set_field_name<S: Into<String>>(&mut self, field_name: S) {
        self.field_name = field_name.into();
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Store the text to analyze, replacing any previously loaded text.
    pub fn load_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        debug!("loaded {} bytes of text", self.text.len());
    }

    /// Read the file at `path` and load its contents.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| LexiscopeError::input_unavailable(path, e))?;
        info!("read {} bytes from {}", text.len(), path.display());
        self.load_text(text);
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Run the view in registry slot `index` over a fresh token stream.
    pub fn run_view(&self, index: usize) -> Result<ViewOutput> {
        let view = self.views.get(index).ok_or_else(|| {
            LexiscopeError::view_unavailable(format!("no view registered at index {index}"))
        })?;
        self.reduce_with(view.as_ref())
    }

    /// Run the view registered under `name` over a fresh token stream.
    pub fn run_view_by_name(&self, name: &str) -> Result<ViewOutput> {
        let view = self
            .views
            .iter()
            .find(|view| view.name() == name)
            .ok_or_else(|| LexiscopeError::view_unavailable(format!("no view named '{name}'")))?;
        self.reduce_with(view.as_ref())
    }

    /// The offsets report of the loaded text, trimmed.
    pub fn run_offsets_report(&self) -> Result<String> {
        let output = self.run_view(OFFSETS_VIEW)?;
        Ok(output.report.trim().to_string())
    }

    /// The frequency report of the loaded text, trimmed, and its token count.
    pub fn run_frequency_report(&self) -> Result<(String, usize)> {
        let output = self.run_view(FREQUENCY_VIEW)?;
        Ok((output.report.trim().to_string(), output.token_count))
    }

    fn reduce_with(&self, view: &dyn ViewReducer) -> Result<ViewOutput> {
        let info = self.active_analyzer().ok_or_else(|| {
            LexiscopeError::analyzer_unavailable(format!(
                "no analyzer registered at index {}",
                self.active_analyzer
            ))
        })?;

        let stream = info.analyzer().analyze(&self.field_name, &self.text)?;
        let output = view.reduce(stream);
        debug!(
            "view '{}' consumed {} tokens using '{}'",
            view.name(),
            output.token_count,
            info.name()
        );
        Ok(output)
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("analyzers", &self.analyzers)
            .field(
                "views",
                &self.views.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .field("active_analyzer", &self.active_analyzer)
            .field("field_name", &self.field_name)
            .field("text_len", &self.text.len())
            .finish()
    }
}

/// The summary line printed after a frequency report.
pub fn total_terms_message(token_count: usize) -> String {
    format!("Total of {token_count} Term(s) Found.")
}
