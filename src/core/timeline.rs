//! Message counts over time.
//!
//! Both timelines group on chronological keys and only attach display labels
//! afterwards, so `"Apr-2024"` never sorts before `"Jan-2024"`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::filter::UserFilter;
use crate::message::MessageRecord;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    /// `"Mon-YYYY"` label, e.g. `"Jan-2024"`
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Messages sent on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Monthly message counts, oldest month first.
///
/// Months without messages are absent.
pub fn monthly_timeline(filter: &UserFilter, records: &[MessageRecord]) -> Vec<TimelinePoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();

    for record in filter.apply(records) {
        months
            .entry((record.year(), record.month_num()))
            .or_insert((record.month_year(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (label, count))| TimelinePoint {
            label: label.to_string(),
            year,
            month,
            count,
        })
        .collect()
}

/// Daily message counts, oldest day first.
pub fn daily_timeline(filter: &UserFilter, records: &[MessageRecord]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in filter.apply(records) {
        *days.entry(record.date()).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}
