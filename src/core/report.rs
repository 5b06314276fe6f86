//! Every statistic for one user filter, in one serializable value.

use serde::Serialize;

use super::activity::{ActivityMap, Heatmap};
use super::emoji::{EmojiCount, total_emojis};
use super::filter::UserFilter;
use super::stats::Stats;
use super::timeline::{DailyPoint, TimelinePoint};
use super::users::BusyUsers;
use super::words::{WordCloud, WordCount};

/// Full analysis of a conversation for one [`UserFilter`].
///
/// Built by [`Analyzer::report`](super::Analyzer::report). The busiest-users
/// ranking only makes sense for the whole conversation, so `busy_users` is
/// `None` for single-user reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub filter: UserFilter,
    pub stats: Stats,
    pub monthly_timeline: Vec<TimelinePoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: ActivityMap,
    pub month_activity: ActivityMap,
    pub heatmap: Heatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub wordcloud: WordCloud,
    pub top_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
}

impl ChatReport {
    /// Returns `true` if the filter selected no messages.
    pub fn is_empty(&self) -> bool {
        self.stats.messages == 0
    }

    /// Total emoji occurrences.
    pub fn emoji_total(&self) -> usize {
        total_emojis(&self.emojis)
    }
}
