//! Parsed chat message records.
//!
//! [`MessageRecord`] is the single row type every statistic is computed from.
//! Besides the raw `timestamp`, `sender` and `body`, a record carries the
//! calendar fields the aggregations group by (year, month, weekday, hour
//! bucket, ...). They are derived once in [`MessageRecord::new`] and there is
//! no mutating API, so they can never disagree with the timestamp.
//!
//! # Example
//!
//! ```
//! use chatlytics::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(13, 45, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Happy new year!");
//!
//! assert_eq!(record.month_year(), "Jan-2024");
//! assert_eq!(record.day_name(), "Monday");
//! assert_eq!(record.hour_bucket(), "13-14");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Sender assigned to system-generated lines (joins, leaves, encryption
/// notices) that have no human author.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// A single parsed chat message.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Local date and time from the message header |
/// | `sender` | Display name, or [`GROUP_NOTIFICATION`] |
/// | `body` | Message text, trailing line break removed |
/// | `year`, `month`, `month_num`, `day`, `day_name`, `hour`, `minute` | Calendar parts of `timestamp` |
/// | `month_year` | `"Mon-YYYY"` bucket label |
/// | `hour_bucket` | `"HH-HH"` heatmap column label |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    year: i32,
    month: &'static str,
    month_num: u32,
    day: u32,
    day_name: &'static str,
    hour: u32,
    minute: u32,
    month_year: String,
    hour_bucket: String,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        let month_num = timestamp.month();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            year: timestamp.year(),
            month: month_name(month_num),
            month_num,
            day: timestamp.day(),
            day_name: weekday_name(timestamp.weekday()),
            hour,
            minute: timestamp.minute(),
            month_year: timestamp.format("%b-%Y").to_string(),
            hour_bucket: hour_bucket(hour),
        }
    }

    /// Creates a system notification record (sender = [`GROUP_NOTIFICATION`]).
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Calendar date of the message, the key of the daily timeline.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Full English month name, e.g. `"January"`.
    pub fn month(&self) -> &'static str {
        self.month
    }

    /// Month number, 1 through 12.
    pub fn month_num(&self) -> u32 {
        self.month_num
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Monthly bucket label, e.g. `"Jan-2024"`.
    pub fn month_year(&self) -> &str {
        &self.month_year
    }

    /// Heatmap column label, e.g. `"13-14"`; hour 23 wraps to `"23-00"`.
    pub fn hour_bucket(&self) -> &str {
        &self.hour_bucket
    }

    /// Returns `true` for system-generated lines without a human sender.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// English weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month_num: u32) -> &'static str {
    MONTHS[(month_num as usize - 1) % 12]
}

fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize]
}

/// Formats the one-hour window starting at `hour` as `"HH-HH"`.
pub fn hour_bucket(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}
