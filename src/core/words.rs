//! Word frequencies for the word cloud and the most-common-words table.
//!
//! Both views share one token stream: lowercased whitespace-separated tokens
//! of human-written, non-media bodies, minus stop words and emoji-only tokens.

use serde::Serialize;

use super::counter::Counter;
use super::emoji::is_emoji_only;
use super::filter::UserFilter;
use crate::config::AnalyzerConfig;
use crate::message::MessageRecord;

/// A word and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A word cloud entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`
    pub weight: f64,
}

/// Input for a word cloud renderer, most frequent word first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCloud {
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn word_counter(
    filter: &UserFilter,
    records: &[MessageRecord],
    config: &AnalyzerConfig,
) -> Counter<String> {
    filter
        .apply(records)
        .filter(|record| !record.is_notification())
        .filter(|record| record.body() != config.media_placeholder)
        .flat_map(|record| {
            record
                .body()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|word| !config.stop_words.contains(word) && !is_emoji_only(word))
        .collect()
}

/// The `config.top_words` most used words, ties in first-use order.
pub fn most_common_words(
    filter: &UserFilter,
    records: &[MessageRecord],
    config: &AnalyzerConfig,
) -> Vec<WordCount> {
    word_counter(filter, records, config)
        .most_common(Some(config.top_words))
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Word frequencies weighted for rendering, at most
/// `config.wordcloud_max_words` of them.
pub fn create_wordcloud(
    filter: &UserFilter,
    records: &[MessageRecord],
    config: &AnalyzerConfig,
) -> WordCloud {
    let ranked = word_counter(filter, records, config).most_common(Some(config.wordcloud_max_words));
    let Some(max) = ranked.first().map(|(_, count)| *count) else {
        return WordCloud::default();
    };

    WordCloud {
        words: ranked
            .into_iter()
            .map(|(word, count)| WeightedWord {
                word,
                count,
                weight: count as f64 / max as f64,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::GROUP_NOTIFICATION;
    use chrono::NaiveDate;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::new().with_stop_words(["the", "a"])
    }

    #[test]
    fn test_most_common_words() {
        let records = vec![
            record("Alice", "Rust is fun"),
            record("Bob", "rust RUST the fun"),
            record("Bob", "<Media omitted>"),
            record(GROUP_NOTIFICATION, "Rust Rust Rust joined"),
        ];
        let words = most_common_words(&UserFilter::All, &records, &config());
        assert_eq!(
            words,
            vec![
                WordCount { word: "rust".into(), count: 3 },
                WordCount { word: "fun".into(), count: 2 },
                WordCount { word: "is".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_stop_words_case_insensitive() {
        let records = vec![record("Alice", "The THE a A cat")];
        let words = most_common_words(&UserFilter::All, &records, &config());
        assert_eq!(words, vec![WordCount { word: "cat".into(), count: 1 }]);
    }

    #[test]
    fn test_ties_and_limit() {
        let records = vec![record("Alice", "zeta alpha mid alpha zeta")];
        let config = config().with_top_words(2);
        let words = most_common_words(&UserFilter::All, &records, &config);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "zeta");
        assert_eq!(words[1].word, "alpha");
    }

    #[test]
    fn test_emoji_tokens_skipped() {
        let records = vec![record("Alice", "hello 😀 hello")];
        let words = most_common_words(&UserFilter::All, &records, &config());
        assert_eq!(words, vec![WordCount { word: "hello".into(), count: 2 }]);
    }

    #[test]
    fn test_wordcloud_weights() {
        let records = vec![record("Alice", "cat cat cat cat dog")];
        let cloud = create_wordcloud(&UserFilter::All, &records, &config());
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.words[0].word, "cat");
        assert_eq!(cloud.words[0].weight, 1.0);
        assert_eq!(cloud.words[1].weight, 0.25);
    }

    #[test]
    fn test_wordcloud_cap_and_empty() {
        let records = vec![record("Alice", "a1 b2 c3 d4")];
        let config = config().with_wordcloud_max_words(3);
        assert_eq!(create_wordcloud(&UserFilter::All, &records, &config).len(), 3);
        assert!(create_wordcloud(&UserFilter::user("Nobody"), &records, &config).is_empty());
    }
}
