//! User selection for aggregation queries.
//!
//! Every statistic takes a [`UserFilter`]: either the whole conversation
//! ([`UserFilter::All`], shown as `"Overall"` in the user picker) or a single
//! sender matched by exact name.
//!
//! # Examples
//!
//! ```
//! use chatlytics::core::filter::UserFilter;
//!
//! assert_eq!("Overall".parse::<UserFilter>().unwrap(), UserFilter::All);
//! assert_eq!(UserFilter::from("Alice"), UserFilter::user("Alice"));
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; `"alice"` does not select `"Alice"`
//! - Filtering by a sender that never wrote yields empty statistics, not an error
//! - `All` keeps system notifications; the word, emoji and media statistics
//!   drop them on their own

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::message::MessageRecord;

/// Label of the whole-conversation entry in the user picker.
pub const OVERALL: &str = "Overall";

/// Which sender's messages a statistic covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UserFilter {
    /// Every record, the whole conversation.
    #[default]
    All,
    /// Only records whose sender equals this name.
    User(String),
}

impl UserFilter {
    /// Creates a single-sender filter.
    pub fn user(name: impl Into<String>) -> Self {
        UserFilter::User(name.into())
    }

    /// Returns `true` for the whole-conversation filter.
    pub fn is_all(&self) -> bool {
        matches!(self, UserFilter::All)
    }

    /// Returns `true` if `record` passes the filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::User(name) => record.sender() == name,
        }
    }

    /// Iterates over the records that pass the filter, in source order.
    pub fn apply<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => write!(f, "{OVERALL}"),
            UserFilter::User(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for UserFilter {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case(OVERALL) || s.eq_ignore_ascii_case("all") {
            UserFilter::All
        } else {
            UserFilter::User(s.to_string())
        }
    }
}

impl FromStr for UserFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserFilter::from(s))
    }
}

impl Serialize for UserFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
