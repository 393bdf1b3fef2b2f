use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Four categories covering growth, decline, a single year and a late start
pub const TRENDS_PAYLOAD: &str = r#"{
    "trends": {
        "cs.AI": {"2020": 10, "2021": 20},
        "cs.CV": {"2019": 7, "2020": 9, "2021": 4},
        "cs.LG": {"2020": 5},
        "math.ST": {"2021": 1, "2022": 3}
    }
}"#;

pub const SEARCH_PAYLOAD: &str = r#"{
    "count": 120,
    "results": [
        {
            "id": 1,
            "paper_id": "2101.00001",
            "title": "Attention Everywhere",
            "authors": "A. Author, B. Author",
            "abstract": "We study attention in many places.",
            "categories": "cs.LG cs.AI",
            "publication_year": 2021
        },
        {
            "id": 2,
            "paper_id": "1905.01234",
            "title": "Graph \"Neural\" Models",
            "authors": "C. Author",
            "abstract": null,
            "categories": "cs.SI",
            "publication_year": 2019
        }
    ]
}"#;

/// Get a Command for papertrend, isolated from the user's config and env
pub fn papertrend() -> Command {
    let mut cmd = cargo_bin_cmd!("papertrend");
    cmd.env(
        "PAPERTREND_CONFIG_DIR",
        std::env::temp_dir().join("papertrend-cli-tests-no-config"),
    )
    .env_remove("PAPERTREND_BASE_URL")
    .env_remove("PAPERTREND_TIMEOUT")
    .env_remove("PAPERTREND_LOG")
    .env_remove("RUST_LOG");
    cmd
}

/// Write a fixture file and return its path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse command stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
