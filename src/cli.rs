//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//! - [`DateFormatArg`] - Export timestamp layouts
//!
//! The enums mirror [`crate::format::OutputFormat`] and
//! [`crate::parsing::DateFormat`] and convert into them.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::parsing::DateFormat;

/// Statistics for WhatsApp chat exports: timelines, activity maps,
/// busiest users, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlytics")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlytics chat.txt
    chatlytics chat.txt --user Alice -o alice.txt
    chatlytics chat.txt --format json -o report.json
    chatlytics chat.txt --format csv -o tables/
    chatlytics chat.txt --date-format month-first-12h --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict statistics to one sender ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (text, JSON) or directory (CSV); text and JSON default to stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Timestamp layout of the export
    #[arg(long, value_enum, default_value = "day-first-12h")]
    pub date_format: DateFormatArg,

    /// Replace the bundled stop words with a word-per-line file
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Analyzer configuration (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Directory CSV tables go to when `--output` is absent.
    pub const DEFAULT_CSV_DIR: &'static str = "chatlytics_tables";

    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable summary on stdout
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Whole report as pretty-printed JSON
    Json,

    /// One CSV file per table
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

/// Export timestamp layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateFormatArg {
    /// 31/12/24, 9:05 PM
    #[default]
    #[value(name = "day-first-12h", alias = "dmy12")]
    DayFirst12h,

    /// 12/31/24, 9:05 PM
    #[value(name = "month-first-12h", alias = "mdy12")]
    MonthFirst12h,

    /// 31/12/24, 21:05
    #[value(name = "day-first-24h", alias = "dmy24")]
    DayFirst24h,
}

impl From<DateFormatArg> for DateFormat {
    fn from(arg: DateFormatArg) -> DateFormat {
        match arg {
            DateFormatArg::DayFirst12h => DateFormat::DayFirst12h,
            DateFormatArg::MonthFirst12h => DateFormat::MonthFirst12h,
            DateFormatArg::DayFirst24h => DateFormat::DayFirst24h,
        }
    }
}
