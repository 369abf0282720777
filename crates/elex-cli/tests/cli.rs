use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REPORT: &str = "Constituency Name: Example East\n\
    Total number of electors: 45,678\n\
    Total number of valid votes polled: 38,234\n\
    Total number of votes for 'None of the Above': 1,234\n";

/// A command isolated from the user's config file, `.env` and environment.
fn elex(workdir: &Path) -> Command {
    let config = workdir.join("elex-test-config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }

    let mut cmd = Command::cargo_bin("elex").unwrap();
    cmd.current_dir(workdir)
        .arg("--config")
        .arg(&config)
        .env_remove("PROJECT_ID")
        .env_remove("PROCESSOR_ID")
        .env_remove("PDF_FOLDER")
        .env_remove("OUTPUT_FOLDER")
        .env_remove("OUTPUT_FILE");
    cmd
}

fn input_dir(root: &TempDir, files: &[&str]) -> std::path::PathBuf {
    let dir = root.path().join("data");
    fs::create_dir_all(&dir).unwrap();
    for name in files {
        fs::write(dir.join(name), b"%PDF-1.4").unwrap();
    }
    dir
}

#[test]
fn run_writes_one_row_per_matching_document() {
    let root = TempDir::new().unwrap();
    let input = input_dir(&root, &["north_ward.pdf", "south_ward.PDF", "east.pdf", "notes.txt"]);
    let output = root.path().join("out").join("results.csv");

    elex(root.path())
        .args(["run", "--provider", "synthetic", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to"));

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Filename,Constituency Name,Total Electors,Valid Votes Polled,NOTA Votes",
            "east.pdf,East,45678,38234,1234",
            "north_ward.pdf,North Ward,45678,38234,1234",
            "south_ward.PDF,South Ward,45678,38234,1234",
        ]
    );
}

#[test]
fn run_json_format() {
    let root = TempDir::new().unwrap();
    let input = input_dir(&root, &["hill_top.pdf"]);
    let output = root.path().join("results.json");

    elex(root.path())
        .args(["run", "-p", "synthetic", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value[0]["Constituency Name"], "Hill Top");
    assert_eq!(value[0]["Filename"], "hill_top.pdf");
}

#[test]
fn run_with_empty_directory_writes_nothing() {
    let root = TempDir::new().unwrap();
    let input = input_dir(&root, &[]);
    fs::write(input.join("readme.md"), "nothing here").unwrap();
    let output = root.path().join("results.csv");

    elex(root.path())
        .args(["run", "--provider", "synthetic", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No .pdf files found"));

    assert!(!output.exists());
}

#[test]
fn run_with_missing_directory_is_not_an_error() {
    let root = TempDir::new().unwrap();

    elex(root.path())
        .args(["run", "--provider", "synthetic", "--input"])
        .arg(root.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));

    assert!(!root.path().join("output").exists());
}

#[test]
fn run_with_document_ai_and_no_credentials_fails() {
    let root = TempDir::new().unwrap();
    let input = input_dir(&root, &["a.pdf"]);

    elex(root.path())
        .args(["run", "--provider", "document-ai", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing Document AI configuration"));
}

#[test]
fn extract_text_file_as_json() {
    let root = TempDir::new().unwrap();
    let report = root.path().join("report.txt");
    fs::write(&report, REPORT).unwrap();

    elex(root.path())
        .arg("extract")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Constituency Name": "Example East""#))
        .stdout(predicate::str::contains(r#""NOTA Votes": "1234""#));
}

#[test]
fn extract_explain_lists_rules() {
    let root = TempDir::new().unwrap();
    let report = root.path().join("partial.txt");
    fs::write(&report, "Registered voters: 1,000").unwrap();

    elex(root.path())
        .args(["extract", "--format", "text", "--explain"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Electors: 1000"))
        .stdout(predicate::str::contains("Total Electors <- rule 3"))
        .stdout(predicate::str::contains("NOTA Votes <- no rule matched"));
}

#[test]
fn extract_explain_lists_outranked_candidates() {
    let root = TempDir::new().unwrap();
    let report = root.path().join("both.txt");
    fs::write(&report, "Electors: 2,000\nRegistered voters: 1,990").unwrap();

    elex(root.path())
        .args(["extract", "--format", "text", "--explain"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Electors: 2000"))
        .stdout(predicate::str::contains("Total Electors <- rule 1 matched"))
        .stdout(predicate::str::contains(
            "Total Electors <- rule 3 also matched \"Registered voters: 1,990\" (outranked)",
        ));
}

#[test]
fn extract_missing_file_fails() {
    let root = TempDir::new().unwrap();

    elex(root.path())
        .args(["extract", "nope.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
