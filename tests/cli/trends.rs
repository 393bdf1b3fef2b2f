use crate::cli::support::{papertrend, stdout_json, write_fixture, TRENDS_PAYLOAD};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Trends command tests
// ============================================================================

#[test]
fn test_trends_human_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 4 categories by total-papers"))
        .stdout(predicate::str::contains("cs.AI"))
        .stdout(predicate::str::contains("Total papers: 59"))
        .stdout(predicate::str::contains("Avg. papers per category: 15"))
        .stdout(predicate::str::contains("Years: 2019-2022"))
        .stdout(predicate::str::contains("Leading category: cs.AI with 30 papers"))
        .stdout(predicate::str::contains("Growing: cs.AI, math.ST"));
}

#[test]
fn test_trends_quiet_omits_summary() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["--quiet", "trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("cs.AI"))
        .stdout(predicate::str::contains("Summary:").not());
}

#[test]
fn test_trends_json_ranking_and_summary() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--format", "json", "trends", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let order: Vec<&str> = json["ranked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["cs.AI", "cs.CV", "cs.LG", "math.ST"]);

    assert_eq!(json["summary"]["total_all_papers"], 59);
    assert_eq!(json["summary"]["total_categories"], 4);
    assert_eq!(json["summary"]["avg_papers_per_category"], 15);
    assert_eq!(json["summary"]["categories_with_growth"], 2);
    assert_eq!(json["ranked"][1]["peak_year"], 2020);
    assert_eq!(json["ranked"][1]["recent_trend"], -5);
    assert!(json["selected"].is_null());
}

#[test]
fn test_trends_peak_year_sort_breaks_ties_by_name() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--format", "json", "trends", "--sort", "peak_year", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let order: Vec<&str> = json["ranked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["math.ST", "cs.AI", "cs.CV", "cs.LG"]);
    assert_eq!(json["view"]["ranking_key"], "peak-year");
}

#[test]
fn test_trends_top_n_limits_display_not_summary() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--format", "json", "trends", "--top-n", "2", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["ranked"].as_array().unwrap().len(), 2);
    assert_eq!(json["sparklines"].as_array().unwrap().len(), 2);
    assert_eq!(json["hidden"], 2);
    assert_eq!(json["summary"]["total_categories"], 4);
}

#[test]
fn test_trends_sparkline_window() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    let output = papertrend()
        .args(["--format", "json", "trends", "--window", "2", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let cv = &json["sparklines"][1];
    assert_eq!(cv["category"], "cs.CV");
    let years: Vec<i64> = cv["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2020, 2021]);
    assert_eq!(cv["bars"][0]["height_percent"], 100.0);
}

#[test]
fn test_trends_selected_category_detail() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["trends", "--category", "cs.CV", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "cs.CV: 20 papers over 3 years, peak 2020 (9), recent trend -5",
        ));
}

#[test]
fn test_trends_unknown_category_is_usage_error() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["trends", "--category", "q-bio.NC", "--input"])
        .arg(&input)
        .assert()
        .code(2);
}

#[test]
fn test_trends_records_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", TRENDS_PAYLOAD);

    papertrend()
        .args(["--format", "records", "trends", "--category", "cs.CV", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H papertrend=1 records=1 mode=trends ranking=total-papers",
        ))
        .stdout(predicate::str::contains(
            "C 1 \"cs.AI\" total=30 start=2020 end=2021 peak=2021 peak_count=20 trend=10",
        ))
        .stdout(predicate::str::contains("P \"cs.AI\" 2020:10:50 2021:20:100"))
        .stdout(predicate::str::contains(
            "S categories=4 papers=59 avg=15 growing=2 years=2019-2022",
        ))
        .stdout(predicate::str::contains(
            "I leader=\"cs.AI\" papers=30 growing=\"cs.AI,math.ST\"",
        ))
        .stdout(predicate::str::contains(
            "D \"cs.CV\" year=2019 count=7 delta=- peak_pct=78",
        ))
        .stdout(predicate::str::contains(
            "D \"cs.CV\" year=2021 count=4 delta=-5 peak_pct=44",
        ));
}

#[test]
fn test_trends_bare_map_payload() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", r#"{"cs.AI": {"2020": 3}}"#);

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("cs.AI"));
}

#[test]
fn test_trends_malformed_payload_exit_code() {
    let dir = tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "trends.json",
        r#"{"trends": {"cs.AI": {"twenty": 3}}}"#,
    );

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_trends_empty_payload_exit_code() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "trends.json", r#"{"trends": {}}"#);

    papertrend()
        .args(["--format", "json", "trends", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_trends_missing_input_file() {
    papertrend()
        .args(["trends", "--input", "/nonexistent/trends.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read trends"));
}

#[test]
fn test_trends_labels_equal_after_trim_exit_code() {
    let dir = tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "trends.json",
        r#"{"trends": {"cs.AI": {"2020": 10}, "cs.AI ": {"2020": 99}}}"#,
    );

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate category"));
}

#[test]
fn test_trends_count_overflow_exit_code() {
    let dir = tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "trends.json",
        r#"{"trends": {"x": {"2020": 18446744073709551615, "2021": 1}}}"#,
    );

    papertrend()
        .args(["trends", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("overflows"));
}
