//! # Chatlytics
//!
//! A Rust library for turning WhatsApp chat exports into conversation
//! statistics.
//!
//! ## Overview
//!
//! Chatlytics reads the `.txt` file WhatsApp produces with "Export chat" and
//! answers the usual questions about a conversation:
//! - **Totals** - messages, words, shared media and links
//! - **Timelines** - messages per month and per day
//! - **Activity** - busiest weekdays and months, a weekday × hour heatmap
//! - **People** - the busiest participants and their share of messages
//! - **Content** - word cloud input, most common words, emoji usage
//!
//! Every statistic can be computed for the whole conversation or for a
//! single participant.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlytics::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "01/01/24, 10:15 AM - Alice: Hello there\n\
//!                01/01/24, 10:16 AM - Bob: Hi Alice 😀";
//!
//!     let records = ChatParser::new().parse(raw)?;
//!     let analyzer = Analyzer::new();
//!
//!     let stats = analyzer.fetch_stats(&UserFilter::All, &records);
//!     assert_eq!(stats.messages, 2);
//!     assert_eq!(stats.words, 4);
//!
//!     let emojis = analyzer.emoji_helper(&UserFilter::All, &records);
//!     assert_eq!(emojis[0].emoji, "😀");
//!     Ok(())
//! }
//! ```
//!
//! ## Full Reports
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatlytics::Result<()> {
//! use chatlytics::prelude::*;
//!
//! let records = ChatParser::new().parse_file("chat.txt".as_ref())?;
//! let report = Analyzer::new().report(&UserFilter::user("Alice"), &records);
//!
//! write_json(&report, "alice.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), export text to records
//! - [`parsing`] - Timestamp layouts and line helpers
//!   - [`DateFormat`](parsing::DateFormat)
//! - [`message`] - [`MessageRecord`] and its derived calendar fields
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`core`] - Statistics
//!   - [`core::filter`] - [`UserFilter`](core::UserFilter)
//!   - [`core::analyzer`] - [`Analyzer`](core::Analyzer)
//!   - [`core::report`] - [`ChatReport`](core::ChatReport)
//!   - [`core::output`] - text, JSON and CSV writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`cli`] - CLI types (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatlyticsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlyticsError, Result};
pub use message::{GROUP_NOTIFICATION, MessageRecord};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlytics::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::message::{GROUP_NOTIFICATION, MessageRecord};

    // Error types
    pub use crate::error::{ChatlyticsError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, parse};
    pub use crate::parsing::DateFormat;

    // Configuration
    pub use crate::config::{AnalyzerConfig, ParserConfig};

    // Statistics
    pub use crate::core::{
        ActivityMap, Analyzer, BusyUsers, ChatReport, EmojiCount, Heatmap, Stats, UserFilter,
        WordCloud, WordCount,
    };

    // Output
    pub use crate::core::output::to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{CsvTable, to_csv_table, write_csv_tables};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::OutputFormat;
}
