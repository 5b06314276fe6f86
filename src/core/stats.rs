//! Headline counters: messages, words, media and links.

use regex::Regex;
use serde::Serialize;

use super::emoji::is_emoji_only;
use super::filter::UserFilter;
use crate::message::MessageRecord;

/// Top-line statistics for one user filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Records in the filtered set, notifications included
    pub messages: usize,
    /// Whitespace-separated words in human-written bodies
    pub words: usize,
    /// Bodies equal to the media placeholder
    pub media: usize,
    /// URL matches across all filtered bodies
    pub links: usize,
}

/// Counts the words of one body.
///
/// A word is a whitespace-separated token; tokens made only of emoji are
/// left to the emoji statistics.
pub fn count_words(body: &str) -> usize {
    body.split_whitespace()
        .filter(|token| !is_emoji_only(token))
        .count()
}

/// Computes [`Stats`] for the filtered records.
///
/// System notifications count as messages and may contain links, but never
/// contribute words or media. A media placeholder body counts as media and
/// its tokens count as words like any other body.
pub fn fetch_stats(
    filter: &UserFilter,
    records: &[MessageRecord],
    media_placeholder: &str,
    url_pattern: &Regex,
) -> Stats {
    filter.apply(records).fold(Stats::default(), |mut stats, record| {
        stats.messages += 1;
        stats.links += url_pattern.find_iter(record.body()).count();
        if !record.is_notification() {
            stats.words += count_words(record.body());
            if record.body() == media_placeholder {
                stats.media += 1;
            }
        }
        stats
    })
}
