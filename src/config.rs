//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies:
//!
//! - [`ParserConfig`] - export line layout and timestamp format
//! - [`AnalyzerConfig`] - stop words, media placeholder, URL pattern, limits
//!
//! Nothing here is global: an [`Analyzer`](crate::core::Analyzer) or
//! [`ChatParser`](crate::parser::ChatParser) receives its configuration at
//! construction.
//!
//! # Example
//!
//! ```rust
//! use chatlytics::config::{AnalyzerConfig, ParserConfig};
//! use chatlytics::parsing::DateFormat;
//!
//! let parser_config = ParserConfig::new().with_date_format(DateFormat::MonthFirst12h);
//!
//! let analyzer_config = AnalyzerConfig::new()
//!     .with_top_words(10)
//!     .with_extra_stop_words(["lol", "ok"]);
//!
//! assert!(analyzer_config.is_stop_word("LOL"));
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChatlyticsError, Result};
use crate::parsing::DateFormat;

/// Body WhatsApp writes in place of a photo, video or audio attachment.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Matches `http(s)://` and bare `www.` links.
pub const DEFAULT_URL_PATTERN: &str = r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#;

/// Bundled stop-word list (Hinglish and English), one word per line.
const DEFAULT_STOP_WORDS: &str = include_str!("../data/stop_hinglish.txt");

// ============================================================================
// Parser configuration
// ============================================================================

/// Configuration for export parsing.
///
/// Either a [`DateFormat`] preset, or a custom header regex plus chrono
/// formats for exports the presets don't cover. A custom pattern must match
/// the whole `DATE, TIME - ` header; capture group 1, when present, is the
/// date-time text handed to chrono.
///
/// # Example
///
/// ```rust
/// use chatlytics::config::ParserConfig;
///
/// // [2024-01-15 10:30] Alice: Hi
/// let config = ParserConfig::new().with_custom_format(
///     r"(?m)^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2})\] ",
///     ["%Y-%m-%d %H:%M"],
/// );
/// assert!(config.custom_pattern.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Preset export layout (default: day-first, 12-hour clock)
    pub date_format: DateFormat,

    /// Custom header regex, overrides the preset when set
    pub custom_pattern: Option<String>,

    /// Chrono formats used together with `custom_pattern`
    pub custom_formats: Vec<String>,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a preset export layout.
    #[must_use]
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = format;
        self
    }

    /// Uses a custom header regex and timestamp formats.
    #[must_use]
    pub fn with_custom_format<I, S>(mut self, pattern: impl Into<String>, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_pattern = Some(pattern.into());
        self.custom_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Header regex in effect.
    pub fn pattern(&self) -> &str {
        self.custom_pattern
            .as_deref()
            .unwrap_or_else(|| self.date_format.pattern())
    }

    /// Chrono formats in effect.
    pub fn datetime_formats(&self) -> Vec<String> {
        if self.custom_pattern.is_some() {
            self.custom_formats.clone()
        } else {
            self.date_format
                .date_parse_formats()
                .iter()
                .map(|f| (*f).to_string())
                .collect()
        }
    }

    /// Description of the expected timestamp layout for error messages.
    pub fn expected(&self) -> &'static str {
        if self.custom_pattern.is_some() {
            "configured custom format"
        } else {
            self.date_format.description()
        }
    }
}

// ============================================================================
// Analyzer configuration
// ============================================================================

/// Static inputs of the aggregation queries.
///
/// Loaded from JSON with [`AnalyzerConfig::from_json_file`]; fields missing
/// from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Body that marks a media attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Regex counting links (default: [`DEFAULT_URL_PATTERN`])
    pub url_pattern: String,

    /// Lowercase words excluded from word statistics
    #[serde(deserialize_with = "deserialize_stop_words")]
    pub stop_words: BTreeSet<String>,

    /// Rows in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Senders in the busiest-users ranking (default: 5)
    pub top_users: usize,

    /// Maximum words kept in the word cloud (default: 200)
    pub wordcloud_max_words: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            stop_words: default_stop_words(),
            top_words: 20,
            top_users: 5,
            wordcloud_max_words: 200,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ChatlyticsError::config(e.to_string(), Some(path.to_path_buf())))
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the link-matching regex.
    #[must_use]
    pub fn with_url_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.url_pattern = pattern.into();
        self
    }

    /// Replaces the stop-word set. Words are lowercased.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Adds words to the current stop-word set.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Replaces the stop-word set with the contents of a word-per-line file.
    pub fn with_stop_words_file(self, path: &Path) -> Result<Self> {
        let words = load_stop_words(path)?;
        Ok(Self {
            stop_words: words,
            ..self
        })
    }

    /// Sets the number of rows in the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of senders in the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the word cloud size limit.
    #[must_use]
    pub fn with_wordcloud_max_words(mut self, n: usize) -> Self {
        self.wordcloud_max_words = n;
        self
    }

    /// Case-insensitive stop-word lookup.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

// ============================================================================
// Stop words
// ============================================================================

/// Returns the bundled stop-word set.
pub fn default_stop_words() -> BTreeSet<String> {
    parse_stop_words(DEFAULT_STOP_WORDS)
}

/// Parses a word-per-line list. Blank lines and `#` comments are skipped;
/// words are trimmed and lowercased.
pub fn parse_stop_words(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Stop words from serialized configs go through the same normalization
/// as the builders and word lists.
fn deserialize_stop_words<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let words = Vec::<String>::deserialize(deserializer)?;
    Ok(words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect())
}

/// Reads a stop-word file.
pub fn load_stop_words(path: &Path) -> Result<BTreeSet<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|source| ChatlyticsError::Utf8 {
        context: format!("stop-word file {}", path.display()),
        source,
    })?;
    Ok(parse_stop_words(&text))
}
