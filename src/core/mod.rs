//! Statistics over parsed chat records.
//!
//! This module contains:
//! - [`filter`] - Overall / single-user selection
//! - [`stats`] - Message, word, media and link counts
//! - [`timeline`] - Monthly and daily timelines
//! - [`activity`] - Weekday and month activity, weekly heatmap
//! - [`users`] - Participants and busiest senders
//! - [`words`] - Word cloud and most common words
//! - [`emoji`] - Emoji frequencies
//! - [`analyzer`] - [`Analyzer`], every query bound to one configuration
//! - [`report`] - [`ChatReport`], every statistic for one filter
//! - [`output`] - Report writers (text, JSON, CSV)
//!
//! Every query is a pure function of a [`UserFilter`] and the record slice.
//! A filter naming a sender that never wrote yields empty results.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlytics::core::{Analyzer, UserFilter};
//!
//! # fn main() -> chatlytics::Result<()> {
//! let records = chatlytics::parser::parse("01/01/24, 10:15 AM - Alice: Hello there")?;
//! let report = Analyzer::new().report(&UserFilter::All, &records);
//! assert_eq!(report.stats.messages, 1);
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod analyzer;
pub mod counter;
pub mod emoji;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{
    ActivityCount, ActivityMap, Heatmap, activity_heatmap, month_activity_map, week_activity_map,
};
pub use analyzer::Analyzer;
pub use emoji::{EmojiCount, emoji_helper, top_repeated, total_emojis};
pub use filter::{OVERALL, UserFilter};
pub use report::ChatReport;
pub use stats::{Stats, fetch_stats};
pub use timeline::{DailyPoint, TimelinePoint, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserCount, UserShare, most_busy_users, user_choices, users};
pub use words::{WeightedWord, WordCloud, WordCount, create_wordcloud, most_common_words};

pub use output::to_text;
#[cfg(feature = "csv-output")]
pub use output::{CsvTable, to_csv_table, write_csv_tables};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
