//! Chat export parser.
//!
//! [`ChatParser`] turns the raw text of an export into an ordered
//! `Vec<MessageRecord>`. The configured header regex is used as a delimiter:
//! every match starts a new message, and everything up to the next match
//! (continuation lines included) is that message's segment.
//!
//! # Example
//!
//! ```rust
//! use chatlytics::parser::ChatParser;
//!
//! # fn main() -> chatlytics::Result<()> {
//! let raw = "01/01/24, 10:15 AM - Alice: Hello there\n\
//!            01/01/24, 10:16 AM - Bob: Hi Alice\n\
//!            second line\n\
//!            01/01/24, 10:17 AM - Alice added Carol";
//!
//! let records = ChatParser::new().parse(raw)?;
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].body(), "Hi Alice\nsecond line");
//! assert!(records[2].is_notification());
//! # Ok(())
//! # }
//! ```
//!
//! A header whose timestamp does not fit the configured format aborts the
//! whole parse with [`ChatlyticsError::MalformedTimestamp`].

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlyticsError, Result};
use crate::message::MessageRecord;
use crate::parsing::{parse_whatsapp_timestamp, split_sender};

/// Parser for WhatsApp `.txt` exports.
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    header: Regex,
    formats: Vec<String>,
}

impl ChatParser {
    /// Creates a parser for the default day-first, 12-hour layout.
    pub fn new() -> Self {
        let config = ParserConfig::default();
        Self {
            header: preset_regex(config.date_format.pattern()),
            formats: config.datetime_formats(),
            config,
        }
    }

    /// Creates a parser with custom configuration.
    ///
    /// Fails with [`ChatlyticsError::InvalidPattern`] when a custom header
    /// regex does not compile.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let pattern = config.pattern();
        let header =
            Regex::new(pattern).map_err(|e| ChatlyticsError::invalid_pattern(pattern, e))?;
        if config.custom_pattern.is_some() && config.custom_formats.is_empty() {
            return Err(ChatlyticsError::invalid_format(
                "timestamp",
                "a custom header pattern needs at least one datetime format",
            ));
        }

        Ok(Self {
            formats: config.datetime_formats(),
            header,
            config,
        })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlyticsError::Utf8 {
            context: format!("reading {}", path.display()),
            source,
        })?;
        self.parse(&content)
    }

    /// Parses raw export text.
    ///
    /// Records come back in source order. Text before the first header is
    /// discarded.
    pub fn parse(&self, raw: &str) -> Result<Vec<MessageRecord>> {
        let text = normalize_line_endings(raw.strip_prefix('\u{feff}').unwrap_or(raw));

        // (header start, header end, date-time text)
        let headers: Vec<(usize, usize, &str)> = self
            .header
            .captures_iter(&text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let datetime = caps.get(1).map_or_else(
                    || whole.as_str().trim_end().trim_end_matches('-'),
                    |m| m.as_str(),
                );
                Some((whole.start(), whole.end(), datetime))
            })
            .collect();

        if let Some(&(first_start, _, _)) = headers.first() {
            if !text[..first_start].trim().is_empty() {
                debug!(bytes = first_start, "discarding text before first message header");
            }
        } else if !text.trim().is_empty() {
            warn!("no message headers matched; check the export date format");
        }

        let mut records = Vec::with_capacity(headers.len());

        for (i, &(start, end, datetime)) in headers.iter().enumerate() {
            let timestamp = parse_whatsapp_timestamp(datetime, self.formats.as_slice())
                .ok_or_else(|| {
                    ChatlyticsError::malformed_timestamp(
                        datetime.trim(),
                        line_number(&text, start),
                        self.config.expected(),
                    )
                })?;

            let segment_end = headers.get(i + 1).map_or(text.len(), |&(next, _, _)| next);
            let segment = text[end..segment_end].trim_end_matches('\n');
            let (sender, body) = split_sender(segment);

            records.push(MessageRecord::new(timestamp, sender, body));
        }

        debug!(records = records.len(), "parsed chat export");
        Ok(records)
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses raw export text with the default configuration.
pub fn parse(raw: &str) -> Result<Vec<MessageRecord>> {
    ChatParser::new().parse(raw)
}

/// Compiles a built-in header pattern.
fn preset_regex(pattern: &'static str) -> Regex {
    // Preset patterns are constants covered by unit tests.
    Regex::new(pattern).expect("built-in header pattern must compile")
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// 1-based line number of a byte offset.
fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
