//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexiscopeArgs, OutputFormat};
use crate::error::Result;
use crate::session::total_terms_message;

/// Label printed in front of the offsets report.
pub const OFFSETS_LABEL: &str = "Position of Words Details : ";

/// Label printed in front of the frequency report.
pub const FREQUENCY_LABEL: &str = "Word Count Frequency Details : ";

/// Reports produced for one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub analyzer: String,
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
}

/// One entry of the analyzer listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerListing {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// Output a file report in the selected format.
pub fn output_report(report: &FileReport, with_header: bool, args: &LexiscopeArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_report_human(report, with_header));
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output the analyzer listing in the selected format.
pub fn output_analyzers(listing: &[AnalyzerListing], args: &LexiscopeArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for entry in listing {
                println!("{:<12}{}", entry.key, entry.name);
                if args.verbosity() > 0 {
                    println!("{:<12}{}", "", entry.description);
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&listing, args),
    }
}

/// Render a file report the way it is printed in human mode.
pub fn render_report_human(report: &FileReport, with_header: bool) -> String {
    let mut out = String::new();

    if with_header {
        out.push_str(&format!("== {} ({}) ==\n", report.path, report.analyzer));
    }
    if let Some(offsets) = &report.offsets {
        out.push_str(&format!("{OFFSETS_LABEL}{offsets}\n"));
    }
    if let Some(frequency) = &report.frequency {
        out.push_str(&format!("{FREQUENCY_LABEL}{frequency}\n"));
    }
    if let Some(count) = report.token_count {
        out.push_str(&total_terms_message(count));
        out.push('\n');
    }

    out
}

fn output_json<T: Serialize>(result: &T, args: &LexiscopeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> FileReport {
        FileReport {
            path: "doc.txt".to_string(),
            analyzer: "Simple Analyzer".to_string(),
            field_name: "defaultFieldName".to_string(),
            offsets: Some("hi   Start:     0  End:     2".to_string()),
            frequency: Some("hi [1]".to_string()),
            token_count: Some(1),
        }
    }

    #[test]
    fn test_render_report_human() {
        let rendered = render_report_human(&sample_report(), false);
        assert_eq!(
            rendered,
            "Position of Words Details : hi   Start:     0  End:     2\n\
             Word Count Frequency Details : hi [1]\n\
             Total of 1 Term(s) Found.\n"
        );
    }

    #[test]
    fn test_render_report_with_header() {
        let rendered = render_report_human(&sample_report(), true);
        assert!(rendered.starts_with("== doc.txt (Simple Analyzer) ==\n"));
    }

    #[test]
    fn test_json_skips_missing_views() {
        let report = FileReport {
            offsets: None,
            ..sample_report()
        };
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("offsets").is_none());
        assert_eq!(json["token_count"], 1);
        assert_eq!(json["frequency"], "hi [1]");
    }
}
