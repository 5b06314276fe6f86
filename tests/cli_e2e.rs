//! End-to-end CLI tests for chatlytics.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text report, user list
//! - **Output formats**: JSON to stdout or file, CSV tables
//! - **Options**: user filter, date format, stop words, config file
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
01/01/24, 9:00 AM - Messages and calls are end-to-end encrypted.
01/01/24, 10:15 AM - Alice: Hello there
01/01/24, 10:16 AM - Bob: Hi Alice 😀
01/01/24, 10:17 AM - Alice added Carol
02/01/24, 9:30 PM - Carol: <Media omitted>
02/01/24, 9:31 PM - Alice: pizza tonight?
pizza pizza
";

const MONTH_FIRST_CHAT: &str = "\
12/31/24, 11:59 PM - Alice: Happy new year!
1/1/25, 12:01 AM - Bob: Same to you";

/// Creates a temporary directory with export fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("month_first.txt"), MONTH_FIRST_CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("stop.txt"), "# custom\npizza\n").unwrap();
    fs::write(dir.path().join("config.json"), r#"{"top_words": 1, "top_users": 1}"#).unwrap();
    fs::write(dir.path().join("bad_config.json"), "{ nope").unwrap();
    fs::write(dir.path().join("binary.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    dir
}

fn chatlytics_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlytics"));
    Command::from_std(cmd)
}

fn input(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Basic Functionality
// ============================================================================

mod basic {
    use super::*;

    #[test]
    fn test_text_report() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .arg(input(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics: Overall"))
            .stdout(predicate::str::contains("Messages:        6"))
            .stdout(predicate::str::contains("Most busy users"))
            .stdout(predicate::str::contains("Jan-2024"));
    }

    #[test]
    fn test_text_report_for_user() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .args([input(&fixtures, "chat.txt").as_str(), "--user", "Alice"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics: Alice"))
            .stdout(predicate::str::contains("Messages:        2"))
            .stdout(predicate::str::contains("Most busy users").not());
    }

    #[test]
    fn test_list_users() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .args([input(&fixtures, "chat.txt").as_str(), "--list-users"])
            .assert()
            .success()
            .stdout("Overall\nAlice\nBob\nCarol\n");
    }

    #[test]
    fn test_help_and_version() {
        chatlytics_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--date-format"));

        chatlytics_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Output Formats
// ============================================================================

mod formats {
    use super::*;

    #[test]
    fn test_json_to_stdout() {
        let fixtures = setup_fixtures();
        let json = stdout_json(
            chatlytics_cmd().args([input(&fixtures, "chat.txt").as_str(), "--format", "json"]),
        );

        assert_eq!(json["filter"], "Overall");
        assert_eq!(json["stats"]["messages"], 6);
        assert_eq!(json["stats"]["media"], 1);
        assert_eq!(json["top_words"][0]["word"], "pizza");
        assert_eq!(json["top_words"][0]["count"], 3);
        assert_eq!(json["emojis"][0]["emoji"], "😀");
    }

    #[test]
    fn test_json_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatlytics_cmd()
            .args([
                input(&fixtures, "chat.txt").as_str(),
                "-f",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["busy_users"]["top"][0]["user"], "Alice");
    }

    #[test]
    fn test_text_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.txt");

        chatlytics_cmd()
            .args([input(&fixtures, "chat.txt").as_str(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics").not());

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("Chat statistics: Overall\n"));
    }

    #[test]
    fn test_csv_tables() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "tables");

        chatlytics_cmd()
            .args([
                input(&fixtures, "chat.txt").as_str(),
                "--format",
                "csv",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        for table in ["monthly_timeline", "daily_timeline", "heatmap", "top_words", "emojis", "busy_users"] {
            assert!(output.join(format!("{table}.csv")).exists(), "missing {table}.csv");
        }
        let daily = fs::read_to_string(output.join("daily_timeline.csv")).unwrap();
        assert_eq!(daily, "date,count\n2024-01-01,4\n2024-01-02,2\n");
    }

    #[test]
    fn test_csv_default_directory() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .current_dir(fixtures.path())
            .args(["chat.txt", "--format", "csv"])
            .assert()
            .success();

        assert!(fixtures.path().join("chatlytics_tables").join("heatmap.csv").exists());
    }
}

// ============================================================================
// Options
// ============================================================================

mod options {
    use super::*;

    #[test]
    fn test_month_first_date_format() {
        let fixtures = setup_fixtures();
        let json = stdout_json(chatlytics_cmd().args([
            input(&fixtures, "month_first.txt").as_str(),
            "--date-format",
            "month-first-12h",
            "--format",
            "json",
        ]));

        assert_eq!(json["monthly_timeline"][0]["label"], "Dec-2024");
        assert_eq!(json["monthly_timeline"][1]["label"], "Jan-2025");
    }

    #[test]
    fn test_custom_stop_words() {
        let fixtures = setup_fixtures();
        let json = stdout_json(chatlytics_cmd().args([
            input(&fixtures, "chat.txt").as_str(),
            "--stop-words",
            input(&fixtures, "stop.txt").as_str(),
            "--format",
            "json",
        ]));

        let words = json["top_words"].as_array().unwrap();
        assert!(words.iter().all(|w| w["word"] != "pizza"));
        assert!(words.iter().any(|w| w["word"] == "hello"));
    }

    #[test]
    fn test_config_file() {
        let fixtures = setup_fixtures();
        let json = stdout_json(chatlytics_cmd().args([
            input(&fixtures, "chat.txt").as_str(),
            "--config",
            input(&fixtures, "config.json").as_str(),
            "--format",
            "json",
        ]));

        assert_eq!(json["top_words"].as_array().unwrap().len(), 1);
        assert_eq!(json["busy_users"]["top"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_user_is_empty_not_error() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .env_remove("RUST_LOG")
            .args([input(&fixtures, "chat.txt").as_str(), "--user", "Zed"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages for this selection."))
            .stderr(predicate::str::contains("user not found"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        let json = stdout_json(
            chatlytics_cmd()
                .env_remove("RUST_LOG")
                .args([input(&fixtures, "chat.txt").as_str(), "-v", "--format", "json"]),
        );
        assert_eq!(json["stats"]["messages"], 6);

        chatlytics_cmd()
            .env_remove("RUST_LOG")
            .args([input(&fixtures, "chat.txt").as_str(), "-v", "--format", "json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("parsed chat export"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        chatlytics_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_malformed_timestamp() {
        let fixtures = setup_fixtures();

        // Day-first default cannot read "12/31/24".
        chatlytics_cmd()
            .arg(input(&fixtures, "month_first.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Malformed timestamp '12/31/24, 11:59 PM' on line 1"));
    }

    #[test]
    fn test_clock_mismatch() {
        let fixtures = setup_fixtures();
        let path = output_path(&fixtures, "24h.txt");
        fs::write(&path, "15/01/24, 22:30 - Alice: late\n").unwrap();

        chatlytics_cmd()
            .arg(path.to_str().unwrap())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Malformed timestamp '15/01/24, 22:30'"));

        chatlytics_cmd()
            .args([path.to_str().unwrap(), "--date-format", "dmy24"])
            .assert()
            .success();
    }

    #[test]
    fn test_invalid_utf8() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .arg(input(&fixtures, "binary.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("UTF-8"));
    }

    #[test]
    fn test_bad_config_file() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .args([
                input(&fixtures, "chat.txt").as_str(),
                "--config",
                input(&fixtures, "bad_config.json").as_str(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }

    #[test]
    fn test_invalid_format_value() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .args([input(&fixtures, "chat.txt").as_str(), "--format", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_empty_export() {
        let fixtures = setup_fixtures();

        chatlytics_cmd()
            .arg(input(&fixtures, "empty.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:        0"));
    }
}
