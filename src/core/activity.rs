//! Weekday, month and hour-of-week activity.

use chrono::Datelike;
use serde::Serialize;

use super::filter::UserFilter;
use crate::message::{MONTHS, MessageRecord, WEEKDAYS, hour_bucket};

/// A label with its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: usize,
}

/// Message counts per weekday or per month name.
///
/// Entries are ordered busiest first; equal counts keep calendar order.
/// Labels without messages are absent, and [`get`](Self::get) returns 0
/// for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityMap {
    entries: Vec<ActivityCount>,
}

impl ActivityMap {
    /// Builds a map from counts indexed in calendar order.
    fn from_calendar_counts(labels: &[&str], counts: &[usize]) -> Self {
        let mut entries: Vec<ActivityCount> = labels
            .iter()
            .zip(counts)
            .filter(|(_, count)| **count > 0)
            .map(|(label, count)| ActivityCount {
                label: (*label).to_string(),
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Count for `label`, 0 when absent.
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map_or(0, |e| e.count)
    }

    pub fn entries(&self) -> &[ActivityCount] {
        &self.entries
    }

    /// The busiest label, if any message was sent.
    pub fn busiest(&self) -> Option<&ActivityCount> {
        self.entries.first()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Messages per weekday name.
pub fn week_activity_map(filter: &UserFilter, records: &[MessageRecord]) -> ActivityMap {
    let mut counts = [0usize; 7];
    for record in filter.apply(records) {
        counts[record.timestamp().weekday().num_days_from_monday() as usize] += 1;
    }
    ActivityMap::from_calendar_counts(&WEEKDAYS, &counts)
}

/// Messages per month name, all years together.
pub fn month_activity_map(filter: &UserFilter, records: &[MessageRecord]) -> ActivityMap {
    let mut counts = [0usize; 12];
    for record in filter.apply(records) {
        counts[record.month_num() as usize - 1] += 1;
    }
    ActivityMap::from_calendar_counts(&MONTHS, &counts)
}

/// Weekday × hour-bucket message counts.
///
/// Only weekdays and hour buckets that occur are present. Rows follow
/// weekday order (Monday first) and columns hour order (`"00-01"` first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Weekday names
    pub rows: Vec<String>,
    /// Hour bucket labels
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for a weekday and hour bucket, 0 for missing combinations.
    pub fn get(&self, day_name: &str, hour_bucket: &str) -> usize {
        let row = self.rows.iter().position(|r| r == day_name);
        let column = self.columns.iter().position(|c| c == hour_bucket);
        match (row, column) {
            (Some(row), Some(column)) => self.cells[row][column],
            _ => 0,
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pivots filtered records into a [`Heatmap`].
pub fn activity_heatmap(filter: &UserFilter, records: &[MessageRecord]) -> Heatmap {
    let mut grid = [[0usize; 24]; 7];
    for record in filter.apply(records) {
        let day = record.timestamp().weekday().num_days_from_monday() as usize;
        grid[day][record.hour() as usize] += 1;
    }

    let active_days: Vec<usize> = (0..7)
        .filter(|&day| grid[day].iter().any(|&c| c > 0))
        .collect();
    let active_hours: Vec<usize> = (0..24)
        .filter(|&hour| grid.iter().any(|row| row[hour] > 0))
        .collect();

    Heatmap {
        rows: active_days
            .iter()
            .map(|&day| WEEKDAYS[day].to_string())
            .collect(),
        columns: active_hours
            .iter()
            .map(|&hour| hour_bucket(hour as u32))
            .collect(),
        cells: active_days
            .iter()
            .map(|&day| active_hours.iter().map(|&hour| grid[day][hour]).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-01-01 is a Monday.
    fn record(sender: &str, m: u32, d: u32, h: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, "msg")
    }

    #[test]
    fn test_week_activity_map() {
        let records = vec![
            record("Alice", 1, 1, 9),
            record("Alice", 1, 3, 9),
            record("Bob", 1, 3, 10),
            record("Bob", 1, 7, 23),
        ];
        let map = week_activity_map(&UserFilter::All, &records);
        assert_eq!(map.get("Wednesday"), 2);
        assert_eq!(map.get("Monday"), 1);
        assert_eq!(map.get("Sunday"), 1);
        assert_eq!(map.get("Friday"), 0);
        assert_eq!(map.total(), 4);
        assert_eq!(map.busiest().unwrap().label, "Wednesday");
        // Ties in calendar order.
        assert_eq!(map.entries()[1].label, "Monday");
        assert_eq!(map.entries()[2].label, "Sunday");
    }

    #[test]
    fn test_month_activity_map() {
        let records = vec![
            record("Alice", 3, 1, 9),
            record("Alice", 1, 1, 9),
            record("Alice", 3, 2, 9),
        ];
        let map = month_activity_map(&UserFilter::All, &records);
        let labels: Vec<_> = map.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["March", "January"]);
        assert_eq!(map.get("March"), 2);
    }

    #[test]
    fn test_activity_heatmap() {
        let records = vec![
            record("Alice", 1, 2, 13),
            record("Alice", 1, 2, 13),
            record("Bob", 1, 1, 0),
            record("Bob", 1, 7, 23),
        ];
        let heatmap = activity_heatmap(&UserFilter::All, &records);
        assert_eq!(heatmap.rows, vec!["Monday", "Tuesday", "Sunday"]);
        assert_eq!(heatmap.columns, vec!["00-01", "13-14", "23-00"]);
        assert_eq!(heatmap.get("Tuesday", "13-14"), 2);
        assert_eq!(heatmap.get("Monday", "13-14"), 0);
        assert_eq!(heatmap.get("Friday", "13-14"), 0);
        assert_eq!(heatmap.cells[0], vec![1, 0, 0]);
        assert_eq!(heatmap.total(), 4);
    }

    #[test]
    fn test_empty_for_unknown_user() {
        let records = vec![record("Alice", 1, 1, 9)];
        let filter = UserFilter::user("Nobody");
        assert!(week_activity_map(&filter, &records).is_empty());
        assert!(month_activity_map(&filter, &records).is_empty());
        let heatmap = activity_heatmap(&filter, &records);
        assert!(heatmap.is_empty());
        assert!(heatmap.columns.is_empty());
    }

    #[test]
    fn test_activity_map_serializes_as_list() {
        let records = vec![record("Alice", 1, 1, 9)];
        let json = serde_json::to_string(&week_activity_map(&UserFilter::All, &records)).unwrap();
        assert_eq!(json, r#"[{"label":"Monday","count":1}]"#);
    }
}
