//! CSV table writer.
//!
//! A report holds several tables of different shapes, so each one becomes
//! its own CSV document.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::WriterBuilder;
use tracing::debug;

use crate::core::report::ChatReport;
use crate::error::{ChatlyticsError, Result};

/// The tabular views of a [`ChatReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsvTable {
    MonthlyTimeline,
    DailyTimeline,
    Heatmap,
    TopWords,
    Emojis,
    BusyUsers,
}

impl CsvTable {
    /// Every table, in the order they are written.
    pub const ALL: [CsvTable; 6] = [
        CsvTable::MonthlyTimeline,
        CsvTable::DailyTimeline,
        CsvTable::Heatmap,
        CsvTable::TopWords,
        CsvTable::Emojis,
        CsvTable::BusyUsers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CsvTable::MonthlyTimeline => "monthly_timeline",
            CsvTable::DailyTimeline => "daily_timeline",
            CsvTable::Heatmap => "heatmap",
            CsvTable::TopWords => "top_words",
            CsvTable::Emojis => "emojis",
            CsvTable::BusyUsers => "busy_users",
        }
    }

    /// File name used by [`write_csv_tables`].
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for CsvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CsvTable {
    type Err = ChatlyticsError;

    fn from_str(s: &str) -> Result<Self> {
        CsvTable::ALL
            .into_iter()
            .find(|table| table.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChatlyticsError::invalid_format("csv table", format!("unknown table '{s}'")))
    }
}

/// Renders one table of a report as CSV.
///
/// # Columns
/// - `monthly_timeline`: `month`, `count`
/// - `daily_timeline`: `date`, `count`
/// - `heatmap`: `day`, then one column per hour bucket
/// - `top_words`: `word`, `count`
/// - `emojis`: `emoji`, `count`, `share`
/// - `busy_users`: `user`, `count`, `percent` (header only for single-user reports)
pub fn to_csv_table(report: &ChatReport, table: CsvTable) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    match table {
        CsvTable::MonthlyTimeline => {
            writer.write_record(["month", "count"])?;
            for point in &report.monthly_timeline {
                writer.write_record([point.label.clone(), point.count.to_string()])?;
            }
        }
        CsvTable::DailyTimeline => {
            writer.write_record(["date", "count"])?;
            for point in &report.daily_timeline {
                writer.write_record([point.date.to_string(), point.count.to_string()])?;
            }
        }
        CsvTable::Heatmap => {
            let heatmap = &report.heatmap;
            let header: Vec<&str> = std::iter::once("day")
                .chain(heatmap.columns.iter().map(String::as_str))
                .collect();
            writer.write_record(&header)?;
            for (day, row) in heatmap.rows.iter().zip(&heatmap.cells) {
                let record: Vec<String> = std::iter::once(day.clone())
                    .chain(row.iter().map(usize::to_string))
                    .collect();
                writer.write_record(&record)?;
            }
        }
        CsvTable::TopWords => {
            writer.write_record(["word", "count"])?;
            for word in &report.top_words {
                writer.write_record([word.word.clone(), word.count.to_string()])?;
            }
        }
        CsvTable::Emojis => {
            let total = report.emoji_total();
            writer.write_record(["emoji", "count", "share"])?;
            for emoji in &report.emojis {
                writer.write_record([
                    emoji.emoji.clone(),
                    emoji.count.to_string(),
                    emoji.share(total).to_string(),
                ])?;
            }
        }
        CsvTable::BusyUsers => {
            writer.write_record(["user", "count", "percent"])?;
            if let Some(busy) = &report.busy_users {
                for share in &busy.shares {
                    writer.write_record([
                        share.user.clone(),
                        share.count.to_string(),
                        share.percent.to_string(),
                    ])?;
                }
            }
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes every table of a report into `dir`, one file each.
///
/// The directory is created when missing. Single-user reports skip the
/// `busy_users` table. Returns the written paths.
pub fn write_csv_tables(report: &ChatReport, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for table in CsvTable::ALL {
        if table == CsvTable::BusyUsers && report.busy_users.is_none() {
            continue;
        }
        let path = dir.join(table.file_name());
        fs::write(&path, to_csv_table(report, table)?)?;
        debug!(path = %path.display(), "wrote csv table");
        written.push(path);
    }
    Ok(written)
}
