//! Aggregation queries bound to one [`AnalyzerConfig`].
//!
//! The free functions in [`core`](crate::core) take their configuration as
//! arguments. [`Analyzer`] owns the configuration and the compiled URL regex
//! so callers answering many queries against the same export don't have to.
//!
//! # Example
//!
//! ```rust
//! use chatlytics::core::{Analyzer, UserFilter};
//! use chatlytics::parser::parse;
//!
//! # fn main() -> chatlytics::Result<()> {
//! let records = parse(
//!     "01/01/24, 10:15 AM - Alice: Hello there\n\
//!      01/01/24, 10:16 AM - Bob: Hi Alice 😀",
//! )?;
//!
//! let analyzer = Analyzer::new();
//! let stats = analyzer.fetch_stats(&UserFilter::All, &records);
//! assert_eq!((stats.messages, stats.words), (2, 4));
//!
//! let choices = analyzer.user_choices(&records);
//! assert_eq!(choices, vec!["Overall", "Alice", "Bob"]);
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use tracing::debug;

use super::activity::{self, ActivityMap, Heatmap};
use super::emoji::{self, EmojiCount};
use super::filter::UserFilter;
use super::report::ChatReport;
use super::stats::{self, Stats};
use super::timeline::{self, DailyPoint, TimelinePoint};
use super::users::{self, BusyUsers};
use super::words::{self, WordCloud, WordCount};
use crate::config::{AnalyzerConfig, DEFAULT_URL_PATTERN};
use crate::error::{ChatlyticsError, Result};
use crate::message::MessageRecord;

/// Statistics engine over parsed records.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    urls: Regex,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            // Constant pattern covered by unit tests.
            urls: Regex::new(DEFAULT_URL_PATTERN).expect("default URL pattern must compile"),
        }
    }

    /// Creates an analyzer with custom configuration.
    ///
    /// Fails with [`ChatlyticsError::InvalidPattern`] when the URL pattern
    /// does not compile.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        let urls = Regex::new(&config.url_pattern)
            .map_err(|e| ChatlyticsError::invalid_pattern(&config.url_pattern, e))?;
        debug!(
            stop_words = config.stop_words.len(),
            top_words = config.top_words,
            top_users = config.top_users,
            "analyzer configured"
        );
        Ok(Self { config, urls })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn fetch_stats(&self, filter: &UserFilter, records: &[MessageRecord]) -> Stats {
        stats::fetch_stats(filter, records, &self.config.media_placeholder, &self.urls)
    }

    pub fn monthly_timeline(
        &self,
        filter: &UserFilter,
        records: &[MessageRecord],
    ) -> Vec<TimelinePoint> {
        timeline::monthly_timeline(filter, records)
    }

    pub fn daily_timeline(&self, filter: &UserFilter, records: &[MessageRecord]) -> Vec<DailyPoint> {
        timeline::daily_timeline(filter, records)
    }

    pub fn week_activity_map(&self, filter: &UserFilter, records: &[MessageRecord]) -> ActivityMap {
        activity::week_activity_map(filter, records)
    }

    pub fn month_activity_map(&self, filter: &UserFilter, records: &[MessageRecord]) -> ActivityMap {
        activity::month_activity_map(filter, records)
    }

    pub fn activity_heatmap(&self, filter: &UserFilter, records: &[MessageRecord]) -> Heatmap {
        activity::activity_heatmap(filter, records)
    }

    /// Busiest senders, `config.top_users` of them in [`BusyUsers::top`].
    pub fn most_busy_users(&self, filter: &UserFilter, records: &[MessageRecord]) -> BusyUsers {
        users::most_busy_users(filter, records, self.config.top_users)
    }

    pub fn create_wordcloud(&self, filter: &UserFilter, records: &[MessageRecord]) -> WordCloud {
        words::create_wordcloud(filter, records, &self.config)
    }

    pub fn most_common_words(
        &self,
        filter: &UserFilter,
        records: &[MessageRecord],
    ) -> Vec<WordCount> {
        words::most_common_words(filter, records, &self.config)
    }

    pub fn emoji_helper(&self, filter: &UserFilter, records: &[MessageRecord]) -> Vec<EmojiCount> {
        emoji::emoji_helper(filter, records)
    }

    /// Distinct human senders, sorted.
    pub fn users(&self, records: &[MessageRecord]) -> Vec<String> {
        users::users(records)
    }

    /// `"Overall"` followed by every sender.
    pub fn user_choices(&self, records: &[MessageRecord]) -> Vec<String> {
        users::user_choices(records)
    }

    /// Runs every query for `filter`.
    pub fn report(&self, filter: &UserFilter, records: &[MessageRecord]) -> ChatReport {
        debug!(%filter, records = records.len(), "building report");
        ChatReport {
            filter: filter.clone(),
            stats: self.fetch_stats(filter, records),
            monthly_timeline: self.monthly_timeline(filter, records),
            daily_timeline: self.daily_timeline(filter, records),
            week_activity: self.week_activity_map(filter, records),
            month_activity: self.month_activity_map(filter, records),
            heatmap: self.activity_heatmap(filter, records),
            busy_users: filter
                .is_all()
                .then(|| self.most_busy_users(filter, records)),
            wordcloud: self.create_wordcloud(filter, records),
            top_words: self.most_common_words(filter, records),
            emojis: self.emoji_helper(filter, records),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
