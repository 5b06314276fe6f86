//! Unified error types for chatlytics.
//!
//! This module provides a single [`ChatlyticsError`] enum that covers every
//! failure the library can report. Aggregation never fails: empty or
//! filter-mismatched inputs produce empty results, so almost all variants
//! come from parsing, configuration loading, or output writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlytics operations.
///
/// # Example
///
/// ```rust
/// use chatlytics::error::Result;
/// use chatlytics::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlyticsError>;

/// The error type for all chatlytics operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlyticsError {
    /// An I/O error occurred while reading the export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A message header carried a date/time the configured format rejects.
    ///
    /// The whole parse is aborted; no partial chat is returned.
    #[error("Malformed timestamp '{input}' on line {line}. Expected format: {expected}")]
    MalformedTimestamp {
        /// The date-time text as it appeared in the export
        input: String,
        /// 1-based line number of the message header
        line: usize,
        /// Human readable description of the expected format
        expected: &'static str,
    },

    /// A configured regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A name given for a format or option is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A configuration or stop-word file could not be loaded.
    #[error("Failed to load config{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Config {
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the export file is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlyticsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlyticsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlyticsError {
    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(input: impl Into<String>, line: usize, expected: &'static str) -> Self {
        ChatlyticsError::MalformedTimestamp {
            input: input.into(),
            line,
            expected,
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatlyticsError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlyticsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlyticsError::Config {
            message: message.into(),
            path,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlyticsError::Io(_))
    }

    /// Returns `true` if this is a malformed timestamp error.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatlyticsError::MalformedTimestamp { .. })
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatlyticsError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlyticsError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
