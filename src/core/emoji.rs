//! Emoji usage.
//!
//! Emoji are classified per `char` with the Unicode `Extended_Pictographic`
//! property. Multi-codepoint sequences are counted by their pictographic
//! parts: `👨‍👩‍👧` contributes one `👨`, one `👩` and one `👧`, while joiners,
//! variation selectors and skin-tone modifiers are not counted. Flags are
//! the exception: a pair of regional indicators such as `🇮🇳` counts as one
//! emoji, and an unpaired indicator is ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::counter::Counter;
use super::filter::UserFilter;
use crate::message::MessageRecord;

static EMOJI_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F1E6}-\x{1F1FF}]{2}|\p{Extended_Pictographic}")
        .expect("emoji class must compile")
});

/// Pictographs plus the invisible parts of emoji sequences.
static EMOJI_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}\x{1F1E6}-\x{1F1FF}\x{200D}\x{FE0F}\x{20E3}]+$",
    )
    .expect("emoji token class must compile")
});

/// An emoji and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

impl EmojiCount {
    /// Percentage of `total` emoji occurrences, rounded to 2 decimals.
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.count as f64 / total as f64 * 10_000.0).round() / 100.0
    }
}

/// Returns `true` if `c` is a pictographic emoji character.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Returns `true` if a whitespace-delimited token is made of emoji only.
pub fn is_emoji_only(token: &str) -> bool {
    EMOJI_TOKEN.is_match(token)
}

/// Emoji extracted from one message body, in order.
pub fn extract_emojis(body: &str) -> impl Iterator<Item = &str> + '_ {
    EMOJI_CHAR.find_iter(body).map(|m| m.as_str())
}

/// Emoji frequency table, most used first; ties keep first-use order.
///
/// System notifications are skipped.
pub fn emoji_helper(filter: &UserFilter, records: &[MessageRecord]) -> Vec<EmojiCount> {
    let counter: Counter<&str> = filter
        .apply(records)
        .filter(|record| !record.is_notification())
        .flat_map(|record| extract_emojis(record.body()))
        .collect();

    counter
        .most_common(None)
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}

/// Leading entries used more than once, at most `limit` of them.
///
/// Expects a table ordered as [`emoji_helper`] returns it.
pub fn top_repeated(emojis: &[EmojiCount], limit: usize) -> &[EmojiCount] {
    let end = emojis
        .iter()
        .take_while(|e| e.count > 1)
        .count()
        .min(limit);
    &emojis[..end]
}

/// Total emoji occurrences in a table.
pub fn total_emojis(emojis: &[EmojiCount]) -> usize {
    emojis.iter().map(|e| e.count).sum()
}
