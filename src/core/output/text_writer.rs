//! Plain-text report rendering for terminals.

use std::fmt::{self, Display};

use crate::core::report::ChatReport;

/// Rows shown per list section; the full data is in JSON/CSV output.
const LIST_ROWS: usize = 10;

/// Renders a report as human-readable text.
pub fn to_text(report: &ChatReport) -> String {
    TextReport(report).to_string()
}

/// [`Display`] adapter over a [`ChatReport`].
pub struct TextReport<'a>(pub &'a ChatReport);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let title = format!("Chat statistics: {}", report.filter);
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(title.chars().count()))?;

        let stats = &report.stats;
        writeln!(f, "Messages: {:>8}", stats.messages)?;
        writeln!(f, "Words:    {:>8}", stats.words)?;
        writeln!(f, "Media:    {:>8}", stats.media)?;
        writeln!(f, "Links:    {:>8}", stats.links)?;

        if report.is_empty() {
            return writeln!(f, "\nNo messages for this selection.");
        }

        section(f, "Monthly timeline")?;
        for point in &report.monthly_timeline {
            writeln!(f, "  {:<10} {:>6}", point.label, point.count)?;
        }

        section(f, "Daily timeline")?;
        for point in report.daily_timeline.iter().rev().take(LIST_ROWS).rev() {
            writeln!(f, "  {:<10} {:>6}", point.date, point.count)?;
        }
        if report.daily_timeline.len() > LIST_ROWS {
            writeln!(f, "  ... {} earlier days", report.daily_timeline.len() - LIST_ROWS)?;
        }

        section(f, "Most busy day")?;
        for entry in report.week_activity.entries() {
            writeln!(f, "  {:<10} {:>6}", entry.label, entry.count)?;
        }

        section(f, "Most busy month")?;
        for entry in report.month_activity.entries() {
            writeln!(f, "  {:<10} {:>6}", entry.label, entry.count)?;
        }

        section(f, "Weekly activity heatmap")?;
        let heatmap = &report.heatmap;
        write!(f, "  {:<10}", "")?;
        for column in &heatmap.columns {
            write!(f, " {column:>5}")?;
        }
        writeln!(f)?;
        for (day, row) in heatmap.rows.iter().zip(&heatmap.cells) {
            write!(f, "  {day:<10}")?;
            for cell in row {
                write!(f, " {cell:>5}")?;
            }
            writeln!(f)?;
        }

        if let Some(busy) = &report.busy_users {
            section(f, "Most busy users")?;
            for user in &busy.shares {
                writeln!(f, "  {:<20} {:>6} {:>7.2}%", user.user, user.count, user.percent)?;
            }
        }

        section(f, "Most common words")?;
        for word in &report.top_words {
            writeln!(f, "  {:<20} {:>6}", word.word, word.count)?;
        }

        section(f, "Emoji")?;
        let total = report.emoji_total();
        for emoji in report.emojis.iter().take(LIST_ROWS) {
            writeln!(f, "  {}  {:>6} {:>7.2}%", emoji.emoji, emoji.count, emoji.share(total))?;
        }
        if report.emojis.is_empty() {
            writeln!(f, "  (none)")?;
        }

        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    writeln!(f, "\n{name}")?;
    writeln!(f, "{}", "-".repeat(name.len()))
}
