use crate::cli::support::{papertrend, write_fixture, TRENDS_PAYLOAD};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["--log-level", "debug", "trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("ingest_trends"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["--verbose", "trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("fetch_trends"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--log-level", "debug", "--log-json", "trends", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_logs_never_reach_stdout() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--log-level", "trace", "--format", "json", "trends", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_all_papers"], 59);
}
