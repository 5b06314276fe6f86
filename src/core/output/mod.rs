//! Report writers.
//!
//! This module provides writers for a [`ChatReport`](crate::core::ChatReport):
//! - [`write_json`] / [`to_json`] - the whole report as one JSON document - requires `json-output` feature
//! - [`write_csv_tables`] / [`to_csv_table`] - one CSV file per table - requires `csv-output` feature
//! - [`to_text`] - terminal summary
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | JSON | Dashboards, APIs, further processing |
//! | CSV | Spreadsheets and plotting tools |
//! | Text | Reading in a terminal |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlytics::Result<()> {
//! use chatlytics::core::output::{CsvTable, to_csv_table, write_csv_tables, write_json};
//! use chatlytics::core::{Analyzer, UserFilter};
//! use chatlytics::parser::ChatParser;
//!
//! let records = ChatParser::new().parse_file("chat.txt".as_ref())?;
//! let report = Analyzer::new().report(&UserFilter::All, &records);
//!
//! write_json(&report, "report.json")?;
//! write_csv_tables(&report, "tables")?;
//!
//! // Or get a single table as a string
//! let heatmap = to_csv_table(&report, CsvTable::Heatmap)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CsvTable, to_csv_table, write_csv_tables};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{TextReport, to_text};
