//! WhatsApp export line format.
//!
//! An Android-style WhatsApp `.txt` export starts every message with a
//! `DATE, TIME - ` header:
//!
//! ```text
//! 01/01/24, 10:15 AM - Alice: Hello there
//! 01/01/24, 10:17 AM - Alice added Bob
//! ```
//!
//! The header layout and the date order depend on the phone's locale and on
//! the app version, so both the header regex and the chrono formats are
//! selected through [`DateFormat`] instead of being hard-coded in the parser.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::message::GROUP_NOTIFICATION;

/// Header pattern shared by every preset. Group 1 is the date-time text.
///
/// The meridiem is optional so a header written with the other clock still
/// splits the export and then fails timestamp parsing instead of being
/// folded into the previous body. `\s` also covers the narrow no-break
/// space (U+202F) newer exports put before AM/PM.
const HEADER: &str =
    r"(?m)^(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:\s?[APap][Mm])?)\s-\s";

/// Supported export date/time layouts.
///
/// The default is [`DayFirst12h`](DateFormat::DayFirst12h), the layout the
/// analyzer was built around: `DD/MM/YY, hh:mm AM - `.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// `15/01/24, 10:30 PM - ` (day first, 12-hour clock)
    #[default]
    #[serde(rename = "day-first-12h", alias = "dmy12")]
    DayFirst12h,
    /// `1/15/24, 10:30 PM - ` (month first, 12-hour clock)
    #[serde(rename = "month-first-12h", alias = "mdy12")]
    MonthFirst12h,
    /// `15/01/24, 22:30 - ` (day first, 24-hour clock)
    #[serde(rename = "day-first-24h", alias = "dmy24")]
    DayFirst24h,
}

impl DateFormat {
    /// Returns the header regex; capture group 1 holds the date-time text.
    ///
    /// All presets split on the same header shape; the clock and date order
    /// are enforced by [`date_parse_formats`](Self::date_parse_formats).
    pub fn pattern(self) -> &'static str {
        HEADER
    }

    /// Returns chrono format strings, tried in order.
    ///
    /// Two-digit years come first: `%Y` would happily read `24` as year 24.
    pub fn date_parse_formats(self) -> &'static [&'static str] {
        match self {
            DateFormat::DayFirst12h => &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"],
            DateFormat::MonthFirst12h => &["%m/%d/%y, %I:%M %p", "%m/%d/%Y, %I:%M %p"],
            DateFormat::DayFirst24h => &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        }
    }

    /// Human readable layout, used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            DateFormat::DayFirst12h => "DD/MM/YY, hh:mm AM/PM",
            DateFormat::MonthFirst12h => "MM/DD/YY, hh:mm AM/PM",
            DateFormat::DayFirst24h => "DD/MM/YY, HH:mm",
        }
    }

    /// Returns all names accepted by [`FromStr`].
    pub fn all_names() -> &'static [&'static str] {
        &[
            "day-first-12h",
            "dmy12",
            "month-first-12h",
            "mdy12",
            "day-first-24h",
            "dmy24",
        ]
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::DayFirst12h => write!(f, "day-first-12h"),
            DateFormat::MonthFirst12h => write!(f, "month-first-12h"),
            DateFormat::DayFirst24h => write!(f, "day-first-24h"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first-12h" | "dmy12" => Ok(DateFormat::DayFirst12h),
            "month-first-12h" | "mdy12" => Ok(DateFormat::MonthFirst12h),
            "day-first-24h" | "dmy24" => Ok(DateFormat::DayFirst24h),
            _ => Err(format!(
                "Unknown date format: '{}'. Expected one of: {}",
                s,
                DateFormat::all_names().join(", ")
            )),
        }
    }
}

/// Parses header date-time text with the given chrono formats.
///
/// Non-breaking spaces are normalized first so `10:15\u{202f}AM` parses
/// like `10:15 AM`.
pub fn parse_whatsapp_timestamp<S: AsRef<str>>(
    datetime_str: &str,
    formats: &[S],
) -> Option<NaiveDateTime> {
    let normalized: String = datetime_str
        .trim()
        .chars()
        .map(|c| if c == '\u{202f}' || c == '\u{a0}' { ' ' } else { c })
        .collect();

    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format.as_ref()).ok())
}

/// Splits a message segment into `(sender, body)`.
///
/// The sender is everything before the first `": "`. Segments without a
/// separator on their first line are system notifications and get the
/// [`GROUP_NOTIFICATION`] sender with the whole segment as body.
pub fn split_sender(segment: &str) -> (&str, &str) {
    match segment.split_once(": ") {
        Some((sender, body)) if !sender.trim().is_empty() && !sender.contains('\n') => {
            (sender, body)
        }
        _ => (GROUP_NOTIFICATION, segment),
    }
}
