//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Serializes a report as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "filter": "Overall",
///   "stats": {"messages": 2, "words": 4, "media": 0, "links": 0},
///   "monthly_timeline": [{"label": "Jan-2024", "year": 2024, "month": 1, "count": 2}],
///   ...
/// }
/// ```
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to a JSON file.
pub fn write_json(report: &ChatReport, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Analyzer, UserFilter};
    use crate::parser::parse;

    const CHAT: &str = "01/01/24, 10:15 AM - Alice: Hello there\n\
                        01/01/24, 10:16 AM - Bob: Hi Alice 😀";

    #[test]
    fn test_to_json_overall() {
        let records = parse(CHAT).unwrap();
        let report = Analyzer::new().report(&UserFilter::All, &records);
        let json = to_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filter"], "Overall");
        assert_eq!(value["stats"]["messages"], 2);
        assert_eq!(value["stats"]["words"], 4);
        assert_eq!(value["monthly_timeline"][0]["label"], "Jan-2024");
        assert_eq!(value["daily_timeline"][0]["date"], "2024-01-01");
        assert_eq!(value["week_activity"][0]["label"], "Monday");
        assert_eq!(value["emojis"][0]["emoji"], "😀");
        assert!(value["busy_users"]["top"].is_array());
    }

    #[test]
    fn test_single_user_omits_busy_users() {
        let records = parse(CHAT).unwrap();
        let report = Analyzer::new().report(&UserFilter::user("Bob"), &records);
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(value["filter"], "Bob");
        assert!(value.get("busy_users").is_none());
    }

    #[test]
    fn test_write_json() {
        let records = parse(CHAT).unwrap();
        let report = Analyzer::new().report(&UserFilter::All, &records);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"heatmap\""));
        assert!(content.contains("\"wordcloud\""));
    }
}
