//! Participants and their share of the conversation.

use std::collections::BTreeSet;

use serde::Serialize;

use super::counter::Counter;
use super::filter::{OVERALL, UserFilter};
use crate::message::MessageRecord;

/// A sender with their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub count: usize,
}

/// A sender with their percentage of all human-written messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    pub count: usize,
    /// Rounded to 2 decimals
    pub percent: f64,
}

/// Busiest senders of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The most active senders, busiest first
    pub top: Vec<UserCount>,
    /// Every sender's share, busiest first
    pub shares: Vec<UserShare>,
}

/// Distinct human senders, sorted by name.
pub fn users(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !record.is_notification())
        .map(|record| record.sender())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The user picker list: `"Overall"` followed by [`users`].
pub fn user_choices(records: &[MessageRecord]) -> Vec<String> {
    std::iter::once(OVERALL.to_string())
        .chain(users(records))
        .collect()
}

/// Ranks senders by message count.
///
/// Meant for [`UserFilter::All`]; a single-user filter ranks just that
/// user. System notifications are never ranked, nor counted in the
/// percentage base. Ties keep first-message order.
pub fn most_busy_users(filter: &UserFilter, records: &[MessageRecord], top_n: usize) -> BusyUsers {
    let counter: Counter<&str> = filter
        .apply(records)
        .filter(|record| !record.is_notification())
        .map(|record| record.sender())
        .collect();

    let total = counter.total();
    let ranked = counter.most_common(None);

    BusyUsers {
        top: ranked
            .iter()
            .take(top_n)
            .map(|&(user, count)| UserCount {
                user: user.to_string(),
                count,
            })
            .collect(),
        shares: ranked
            .iter()
            .map(|&(user, count)| UserShare {
                user: user.to_string(),
                count,
                percent: percent(count, total),
            })
            .collect(),
    }
}

/// `part / total` as a percentage rounded to 2 decimals.
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::GROUP_NOTIFICATION;
    use chrono::NaiveDate;

    fn record(sender: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, "msg")
    }

    fn chat(senders: &[&str]) -> Vec<MessageRecord> {
        senders.iter().map(|s| record(s)).collect()
    }

    #[test]
    fn test_users_sorted_without_sentinel() {
        let records = chat(&["Zoe", "Alice", GROUP_NOTIFICATION, "Bob", "Alice"]);
        assert_eq!(users(&records), vec!["Alice", "Bob", "Zoe"]);
        assert_eq!(user_choices(&records), vec!["Overall", "Alice", "Bob", "Zoe"]);
    }

    #[test]
    fn test_most_busy_users() {
        let records = chat(&["Bob", "Alice", "Alice", GROUP_NOTIFICATION, "Carol", "Alice", "Bob"]);
        let busy = most_busy_users(&UserFilter::All, &records, 2);

        assert_eq!(
            busy.top,
            vec![
                UserCount { user: "Alice".into(), count: 3 },
                UserCount { user: "Bob".into(), count: 2 },
            ]
        );
        assert_eq!(busy.shares.len(), 3);
        assert_eq!(busy.shares[0].percent, 50.0);
        assert_eq!(busy.shares[1].percent, 33.33);
        assert_eq!(busy.shares[2].percent, 16.67);
        assert!(busy.shares.iter().all(|s| s.user != GROUP_NOTIFICATION));
    }

    #[test]
    fn test_ties_keep_first_message_order() {
        let records = chat(&["Bob", "Alice", "Alice", "Bob"]);
        let busy = most_busy_users(&UserFilter::All, &records, 5);
        assert_eq!(busy.top[0].user, "Bob");
        assert_eq!(busy.top[1].user, "Alice");
    }

    #[test]
    fn test_single_user_filter() {
        let records = chat(&["Bob", "Alice"]);
        let busy = most_busy_users(&UserFilter::user("Alice"), &records, 5);
        assert_eq!(busy.top.len(), 1);
        assert_eq!(busy.shares[0].percent, 100.0);
    }

    #[test]
    fn test_only_notifications() {
        let records = chat(&[GROUP_NOTIFICATION, GROUP_NOTIFICATION]);
        let busy = most_busy_users(&UserFilter::All, &records, 5);
        assert!(busy.top.is_empty());
        assert!(busy.shares.is_empty());
        assert!(users(&records).is_empty());
    }
}
