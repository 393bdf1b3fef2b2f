use crate::cli::support::{papertrend, stdout_json, write_fixture, TRENDS_PAYLOAD};
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_file_sets_view_defaults() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);
    let config = write_fixture(
        dir.path(),
        "config.toml",
        "default_top_n = 3\nranking = \"peak-year\"\nsparkline_window = 1\n",
    );

    let output = papertrend()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["trends", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["view"]["top_n"], 3);
    assert_eq!(json["view"]["ranking_key"], "peak-year");
    assert_eq!(json["ranked"][0]["category"], "math.ST");
    assert_eq!(json["sparklines"][0]["bars"].as_array().unwrap().len(), 1);
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);
    let config = write_fixture(
        dir.path(),
        "config.toml",
        "default_top_n = 3\nranking = \"peak-year\"\n",
    );

    let output = papertrend()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["trends", "--top-n", "1", "--sort", "total-papers", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["view"]["top_n"], 1);
    assert_eq!(json["ranked"][0]["category"], "cs.AI");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);
    write_fixture(dir.path(), "config.toml", "ranking = \"category-name\"\n");

    let output = papertrend()
        .env("PAPERTREND_CONFIG_DIR", dir.path())
        .args(["--format", "json", "trends", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["view"]["ranking_key"], "category-name");
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempdir().unwrap();
    let config = write_fixture(dir.path(), "config.toml", "ranking = [");

    papertrend()
        .arg("--config")
        .arg(&config)
        .arg("trends")
        .assert()
        .code(1);
}
