use crate::cli::support::{papertrend, stdout_json, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

const PAPER: &str = r#"{
    "id": 42,
    "paper_id": "2101.00001",
    "title": "Attention Everywhere",
    "authors": "A. Author",
    "abstract": "We study attention in many places.",
    "categories": "cs.LG cs.AI",
    "publication_year": 2021,
    "doi": "10.1000/xyz",
    "journal_ref": "J. Att. 1 (2021)"
}"#;

// ============================================================================
// Paper command tests
// ============================================================================

#[test]
fn test_paper_human_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "paper.json", PAPER);

    papertrend()
        .args(["paper", "2101.00001", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Attention Everywhere\n"))
        .stdout(predicate::str::contains("Id: 2101.00001"))
        .stdout(predicate::str::contains("Categories: cs.LG, cs.AI"))
        .stdout(predicate::str::contains("DOI: 10.1000/xyz"))
        .stdout(predicate::str::contains("Reading time: 1 min"))
        .stdout(predicate::str::contains("We study attention"));
}

#[test]
fn test_paper_json_keeps_abstract_field_name() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "paper.json", PAPER);

    let output = papertrend()
        .args(["--format", "json", "paper", "2101.00001", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["id"], "42");
    assert_eq!(json["abstract"], "We study attention in many places.");
}

#[test]
fn test_paper_records_output() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "paper.json", PAPER);

    papertrend()
        .args(["--format", "records", "paper", "2101.00001", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "N 2101.00001 year=2021 \"Attention Everywhere\" tags=cs.LG,cs.AI minutes=1",
        ))
        .stdout(predicate::str::contains("B We study attention in many places."));
}
