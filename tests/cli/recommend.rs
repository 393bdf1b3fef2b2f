use crate::cli::support::{papertrend, stdout_json, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

fn recommendations(count: usize) -> String {
    let results: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"paper_id": "2{:03}.00001", "title": "Paper {}", "authors": "Author {}",
                    "abstract": "short abstract", "publication_year": {}}}"#,
                i,
                i,
                i,
                2015 + i
            )
        })
        .collect();
    format!(r#"{{"results": [{}]}}"#, results.join(","))
}

// ============================================================================
// Recommend command tests
// ============================================================================

#[test]
fn test_recommend_human_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "recommend.json", &recommendations(3));

    papertrend()
        .args(["recommend", "--abstract", "graph neural networks", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Match quality: Excellent (High relevance matches found)",
        ))
        .stdout(predicate::str::contains(
            "3 results, avg. match 99%, published 2015-2017",
        ))
        .stdout(predicate::str::contains("100%  2000.00001 [2015] Paper 0"))
        .stdout(predicate::str::contains("98.5%  2001.00001 [2016] Paper 1"));
}

#[test]
fn test_recommend_scores_floor_at_85() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "recommend.json", &recommendations(15));

    let output = papertrend()
        .args(["--format", "json", "recommend", "--abstract", "x", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 15);
    assert_eq!(results[0]["match_score"], 100.0);
    assert_eq!(results[10]["match_score"], 85.0);
    assert_eq!(results[14]["match_score"], 85.0);
    assert_eq!(results[0]["paper"]["title"], "Paper 0");
    assert_eq!(json["summary"]["results_count"], 15);
    assert_eq!(json["summary"]["quality"], "excellent");
}

#[test]
fn test_recommend_limit_keeps_summary_over_all_results() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "recommend.json", &recommendations(4));

    let output = papertrend()
        .args(["--format", "json", "recommend", "--abstract", "x", "--limit", "1"])
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["summary"]["results_count"], 4);
    assert_eq!(json["summary"]["year_range"], serde_json::json!([2015, 2018]));
}

#[test]
fn test_recommend_no_results() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "recommend.json", r#"{"results": []}"#);

    papertrend()
        .args(["recommend", "--abstract", "x", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Match quality: Good"))
        .stdout(predicate::str::contains("No similar papers found"));
}

#[test]
fn test_recommend_records_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "recommend.json", &recommendations(2));

    papertrend()
        .args(["--format", "records", "recommend", "--abstract", "x", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H papertrend=1 records=1 mode=recommend results=2 avg_score=99 years=2015-2016 quality=excellent",
        ))
        .stdout(predicate::str::contains(
            "R 2 score=98.5 2001.00001 \"Paper 1\" minutes=1",
        ));
}

#[test]
fn test_recommend_blank_abstract_is_usage_error() {
    papertrend()
        .args(["recommend", "--abstract", "   "])
        .assert()
        .code(2);
}
