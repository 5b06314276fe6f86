//! Output format types for the chatlytics library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlytics::Result<()> {
//! use chatlytics::core::{Analyzer, UserFilter};
//! use chatlytics::format::{OutputFormat, to_format_string, write_to_format};
//!
//! let records = chatlytics::parser::parse("01/01/24, 10:15 AM - Alice: Hello")?;
//! let report = Analyzer::new().report(&UserFilter::All, &records);
//!
//! write_to_format(&report, "report.json", OutputFormat::Json)?;
//!
//! let text = to_format_string(&report, OutputFormat::Text)?;
//! assert!(text.starts_with("Chat statistics: Overall"));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::ChatReport;
use crate::error::ChatlyticsError;

/// Output format for reports.
///
/// - [`Text`](OutputFormat::Text) - Human-readable summary (default)
/// - [`Json`](OutputFormat::Json) - The whole report as one document
/// - [`Csv`](OutputFormat::Csv) - One file per table, written into a directory
///
/// # Example
///
/// ```rust
/// use chatlytics::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "JSON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text summary for terminals
    #[default]
    Text,

    /// Pretty-printed JSON report
    Json,

    /// CSV tables
    Csv,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report in the specified format.
///
/// `path` is a file for text and JSON, and a directory for CSV tables.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The output cannot be written
pub fn write_to_format(
    report: &ChatReport,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatlyticsError> {
    let path = path.as_ref();
    match format {
        OutputFormat::Text => Ok(fs::write(path, crate::core::output::to_text(report))?),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv_tables(report, path).map(|_| ()),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report as a string in the specified format.
///
/// CSV output is several tables and has no single-string form; use
/// [`to_csv_table`](crate::core::output::to_csv_table) for one table.
pub fn to_format_string(report: &ChatReport, format: OutputFormat) -> Result<String, ChatlyticsError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        OutputFormat::Csv => Err(ChatlyticsError::invalid_format(
            "output",
            "CSV output is a set of tables; write it to a directory instead",
        )),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatlyticsError {
    ChatlyticsError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                _ => "json-output",
            }
        ),
    )
}
