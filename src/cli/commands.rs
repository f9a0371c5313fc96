//! Command implementations for Lexiscope CLI.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalyzerKind, SessionConfig};
use crate::error::{LexiscopeError, Result};
use crate::session::AnalysisSession;

/// Execute a CLI command.
pub fn execute_command(args: LexiscopeArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Analyzers => list_analyzers(&args),
    }
}

/// Analyze the requested files and print their reports in input order.
fn analyze(args: &AnalyzeArgs, cli_args: &LexiscopeArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let paths = if args.files.is_empty() {
        vec![prompt_for_path(&mut io::stdin().lock())?]
    } else {
        args.files.clone()
    };
    info!(
        "analyzing {} file(s) with {}",
        paths.len(),
        config.analyzer.display_name()
    );

    // Each file gets its own session; nothing is shared between workers.
    let reports: Vec<Result<FileReport>> = paths
        .par_iter()
        .map(|path| analyze_file(path, &config, args.view))
        .collect();

    let with_header = paths.len() > 1 || cli_args.verbosity() > 1;
    for report in reports {
        output_report(&report?, with_header, cli_args)?;
    }

    Ok(())
}

/// Merge the config file (if any) with command line overrides.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            SessionConfig::from_file(path)?
        }
        None => SessionConfig::default(),
    };

    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
        config.analyzer = AnalyzerKind::Pattern;
    }
    if args.gaps {
        config.gaps = true;
    }
    if let Some(kind) = args.analyzer {
        config.analyzer = kind;
    }
    if let Some(field) = &args.field {
        config.field_name = field.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Run the selected views over one file.
pub fn analyze_file(path: &Path, config: &SessionConfig, view: ViewSelection) -> Result<FileReport> {
    let mut session = AnalysisSession::from_config(config)?;
    session.load_file(path)?;

    let offsets = if view.includes_offsets() {
        Some(session.run_offsets_report()?)
    } else {
        None
    };
    let (frequency, token_count) = if view.includes_frequency() {
        let (report, count) = session.run_frequency_report()?;
        (Some(report), Some(count))
    } else {
        (None, None)
    };

    let analyzer = session
        .active_analyzer()
        .map(|info| info.name().to_string())
        .unwrap_or_default();

    Ok(FileReport {
        path: path.display().to_string(),
        analyzer,
        field_name: session.field_name().to_string(),
        offsets,
        frequency,
        token_count,
    })
}

/// Ask for a file path on the terminal and read one line from `input`.
pub fn prompt_for_path<R: BufRead>(input: &mut R) -> Result<PathBuf> {
    eprintln!("Provide the File Path to Read: ");
    io::stderr().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let path = line.trim();
    if path.is_empty() {
        return Err(LexiscopeError::config("no file path provided"));
    }
    Ok(PathBuf::from(path))
}

/// List the built-in analyzers.
fn list_analyzers(cli_args: &LexiscopeArgs) -> Result<()> {
    let listing: Vec<AnalyzerListing> = AnalyzerKind::ALL
        .iter()
        .map(|kind| AnalyzerListing {
            key: kind
                .to_possible_value()
                .map(|value| value.get_name().to_string())
                .unwrap_or_default(),
            name: kind.display_name().to_string(),
            description: kind.description().to_string(),
        })
        .collect();

    output_analyzers(&listing, cli_args)
}
