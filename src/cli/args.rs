//! Command line argument parsing for Lexiscope CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalyzerKind;

/// Lexiscope - inspect how a text analysis pipeline sees a document
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiscope")]
#[command(about = "Inspect tokenization, offsets and term frequencies of a text document")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct LexiscopeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiscopeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze one or more text files
    Analyze(AnalyzeArgs),

    /// List the built-in analyzers
    Analyzers,
}

/// Arguments for analyzing documents
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Files to analyze (prompts for a path when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Analyzer to use (overrides the config file)
    #[arg(short, long, env = "LEXISCOPE_ANALYZER")]
    pub analyzer: Option<AnalyzerKind>,

    /// Token pattern for the pattern analyzer
    #[arg(long)]
    pub pattern: Option<String>,

    /// Emit the text between pattern matches instead of the matches
    #[arg(long)]
    pub gaps: bool,

    /// Field name passed to the analyzer
    #[arg(long)]
    pub field: Option<String>,

    /// Session configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Which reports to print
    #[arg(long, default_value = "all")]
    pub view: ViewSelection,
}

/// Reports selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSelection {
    /// Offsets and frequencies
    All,
    /// Terms with offsets only
    Offsets,
    /// Term frequencies only
    Frequency,
}

impl ViewSelection {
    pub fn includes_offsets(&self) -> bool {
        matches!(self, ViewSelection::All | ViewSelection::Offsets)
    }

    pub fn includes_frequency(&self) -> bool {
        matches!(self, ViewSelection::All | ViewSelection::Frequency)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
