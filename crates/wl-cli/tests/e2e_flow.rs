//! End-to-end integration tests for the session logging flow.
//!
//! Drives the `wl` binary: add → check → fit → list → report, all against
//! a JSONL store in a temp directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn wl_binary() -> String {
    env!("CARGO_BIN_EXE_wl").to_string()
}

/// Writes a config file pointing the store into the temp directory and
/// returns its path.
fn write_config(temp: &Path, min_session_minutes: u16) -> PathBuf {
    let store_path = temp.join("sessions.jsonl");
    let config_path = temp.join("config.toml");
    let config = format!(
        "store_path = {:?}\nmin_session_minutes = {min_session_minutes}\n\n[lunch]\nstart = \"12:00\"\nend = \"13:00\"\n",
        store_path.display().to_string(),
    );
    std::fs::write(&config_path, config).unwrap();
    config_path
}

fn run_wl(temp: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(wl_binary())
        .env("HOME", temp)
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run wl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_add_then_list() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let added = run_wl(
        temp.path(),
        &config,
        &["add", "09:00", "10:00", "--date", "2026-08-07", "--note", "standup"],
    );
    assert!(added.status.success(), "add should succeed: {}", stderr(&added));
    assert!(stdout(&added).contains("09:00-10:00"));

    let listed = run_wl(temp.path(), &config, &["list", "--date", "2026-08-07"]);
    assert!(listed.status.success());
    let out = stdout(&listed);
    assert!(out.contains("09:00-10:00"), "unexpected list output: {out}");
    assert!(out.contains("standup"));
}

#[test]
fn test_overlapping_add_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let first = run_wl(
        temp.path(),
        &config,
        &["add", "09:00", "10:00", "--date", "2026-08-07"],
    );
    assert!(first.status.success());

    let second = run_wl(
        temp.path(),
        &config,
        &["add", "09:30", "10:30", "--date", "2026-08-07"],
    );
    assert!(!second.status.success(), "overlapping add must fail");
    assert!(
        stderr(&second).contains("overlaps"),
        "unexpected error: {}",
        stderr(&second)
    );

    // The rejected session must not have been written.
    let store = std::fs::read_to_string(temp.path().join("sessions.jsonl")).unwrap();
    assert_eq!(store.lines().count(), 1);
}

#[test]
fn test_adjacent_add_is_accepted() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let first = run_wl(
        temp.path(),
        &config,
        &["add", "09:00", "10:00", "--date", "2026-08-07"],
    );
    assert!(first.status.success());

    // Half-open ranges: starting exactly at the previous end is fine.
    let second = run_wl(
        temp.path(),
        &config,
        &["add", "10:00", "11:00", "--date", "2026-08-07"],
    );
    assert!(second.status.success(), "{}", stderr(&second));
}

#[test]
fn test_minimum_duration_is_enforced() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 5);

    let output = run_wl(
        temp.path(),
        &config,
        &["add", "09:00", "09:02", "--date", "2026-08-07"],
    );
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("at least 5"),
        "unexpected error: {}",
        stderr(&output)
    );
}

#[test]
fn test_malformed_time_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let output = run_wl(
        temp.path(),
        &config,
        &["add", "24:00", "25:00", "--date", "2026-08-07"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid start time"));
}

#[test]
fn test_check_exclude_skips_edited_session() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    // Seed the store with a known session ID.
    std::fs::write(
        temp.path().join("sessions.jsonl"),
        concat!(
            r#"{"id":"sess-a","date":"2026-08-07","start":"09:00","end":"10:00"}"#,
            "\n"
        ),
    )
    .unwrap();

    // Growing the same session must not conflict with its old slot.
    let edited = run_wl(
        temp.path(),
        &config,
        &[
            "check", "09:00", "10:30", "--date", "2026-08-07", "--exclude", "sess-a",
        ],
    );
    assert!(edited.status.success(), "{}", stderr(&edited));

    // Without the exclusion the same range is a conflict.
    let fresh = run_wl(
        temp.path(),
        &config,
        &["check", "09:00", "10:30", "--date", "2026-08-07"],
    );
    assert!(!fresh.status.success());
    assert!(stderr(&fresh).contains("overlaps"));
}

#[test]
fn test_open_session_never_blocks_validation() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    // A running session covering the morning, end not yet recorded.
    std::fs::write(
        temp.path().join("sessions.jsonl"),
        concat!(
            r#"{"id":"running","date":"2026-08-07","start":"08:00","end":""}"#,
            "\n"
        ),
    )
    .unwrap();

    let output = run_wl(
        temp.path(),
        &config,
        &["add", "08:30", "09:30", "--date", "2026-08-07"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_fit_adjusts_around_existing_session() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let seeded = run_wl(
        temp.path(),
        &config,
        &["add", "12:00", "15:00", "--date", "2026-08-07"],
    );
    assert!(seeded.status.success());

    let output = run_wl(
        temp.path(),
        &config,
        &["fit", "11:00", "12:30", "--date", "2026-08-07"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(
        stdout(&output).contains("adjusted to 11:00-12:00"),
        "unexpected fit output: {}",
        stdout(&output)
    );
}

#[test]
fn test_fit_reports_infeasible_containment() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let seeded = run_wl(
        temp.path(),
        &config,
        &["add", "10:00", "10:30", "--date", "2026-08-07"],
    );
    assert!(seeded.status.success());

    // The proposal swallows the existing session whole.
    let output = run_wl(
        temp.path(),
        &config,
        &["fit", "09:00", "11:00", "--date", "2026-08-07"],
    );
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("no conflict-free range"),
        "unexpected error: {}",
        stderr(&output)
    );
}

#[test]
fn test_report_day_totals_exclude_lunch() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);
    let today = chrono::Local::now().date_naive().to_string();

    for (start, end) in [("09:00", "11:00"), ("11:30", "14:00")] {
        let output = run_wl(temp.path(), &config, &["add", start, end, "--date", &today]);
        assert!(output.status.success(), "{}", stderr(&output));
    }

    // 120m + 150m gross; the second span loses the 12:00-13:00 break.
    let report = run_wl(temp.path(), &config, &["report", "--day"]);
    assert!(report.status.success());
    let out = stdout(&report);
    assert!(out.contains("2 session(s)"), "unexpected report: {out}");
    assert!(out.contains("gross 4h 30m, net 3h 30m"), "unexpected report: {out}");
    assert!(out.contains("Total net: 3h 30m"), "unexpected report: {out}");
}

#[test]
fn test_report_json_shape() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);
    let today = chrono::Local::now().date_naive().to_string();

    let added = run_wl(
        temp.path(),
        &config,
        &["add", "09:00", "10:00", "--date", &today],
    );
    assert!(added.status.success());

    let report = run_wl(temp.path(), &config, &["report", "--day", "--json"]);
    assert!(report.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&report)).unwrap();
    let weeks = parsed["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0]["net_minutes"], 60);
    assert_eq!(weeks[0]["days"][0]["sessions"], 1);
}

#[test]
fn test_report_empty_period() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), 1);

    let report = run_wl(temp.path(), &config, &["report", "--last-week"]);
    assert!(report.status.success());
    assert!(stdout(&report).contains("No sessions logged in this period."));
}
