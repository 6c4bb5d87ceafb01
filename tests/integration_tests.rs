//! Integration tests for the fuzzdup CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, relative: &str, size: usize) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![b'x'; size]).unwrap();
}

fn fuzzdup() -> Command {
    let mut cmd = Command::cargo_bin("fuzzdup").unwrap();
    cmd.env_remove("FUZZDUP_LIMIT_SCORE")
        .env_remove("FUZZDUP_LIMIT_SIZE")
        .env_remove("RUST_LOG");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    fuzzdup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit-size"))
        .stdout(predicate::str::contains("--limit-score"));
}

/// Test a root is required
#[test]
fn test_missing_roots_is_usage_error() {
    fuzzdup()
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test an unparsable size aborts before scanning
#[test]
fn test_invalid_limit_size_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.txt", 10);

    fuzzdup()
        .arg("--limit-size")
        .arg("abc")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("can not parse limitSize"))
        .stderr(predicate::str::contains("Finished").not());
}

/// Test the size can also come from the environment
#[test]
fn test_invalid_limit_size_from_env() {
    let temp_dir = TempDir::new().unwrap();

    fuzzdup()
        .env("FUZZDUP_LIMIT_SIZE", "K")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("can not parse limitSize"));
}

/// Test a renamed copy is reported once, against the earlier file
#[test]
fn test_renamed_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a/report_final.txt", 2100);
    write_file(temp_dir.path(), "b/report.txt", 2000);
    write_file(temp_dir.path(), "c/report.md", 10);

    let assert = fuzzdup()
        .arg("--limit-size")
        .arg("1K")
        .arg("--limit-score")
        .arg("50")
        .arg(temp_dir.path())
        .assert()
        .success()
        // root, a, b, c and three files; the small file is not analyzed
        .stderr(predicate::str::contains(
            "root 0 - visiting 7 analyzing 2, scanned",
        ))
        .stderr(predicate::str::contains(
            "Finished after visiting 7 and analyzing 2, scanned",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected output: {}", stdout);

    let fields: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0], "1");
    assert_eq!(fields[2], "2.0 kB/2.1 kB");
    assert_eq!(fields[4], "report_final.txt");
    assert_eq!(fields[6], "report.txt");
}

/// Test identical names in two roots carry their root index
#[test]
fn test_same_name_in_two_roots() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_file(first.path(), "photos/img_0001.jpg", 50);
    write_file(second.path(), "backup/2019/img_0001.jpg", 50);

    let assert = fuzzdup()
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("root 0 - visiting"))
        .stderr(predicate::str::contains("root 1 - visiting"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected output: {}", stdout);

    let fields: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(fields[0], "1");
    assert!(fields[3].starts_with("(0)"));
    assert!(fields[3].ends_with("photos"));
    assert_eq!(fields[4], "img_0001.jpg");
    assert!(fields[5].starts_with("(1)"));
    assert_eq!(fields[6], "img_0001.jpg");
}

/// Test an unreadable root is reported and the rest of the run continues
#[test]
fn test_missing_root_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "song.mp3", 10);
    let missing = temp_dir.path().join("nope");

    fuzzdup()
        .arg(&missing)
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot read root"))
        .stderr(predicate::str::contains("root 0 - visiting 0 analyzing 0"))
        .stderr(predicate::str::contains("Finished after visiting 2 and analyzing 1"));
}

/// Test quiet mode keeps only matches on stdout
#[test]
fn test_quiet_hides_progress() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a/notes.txt", 10);
    write_file(temp_dir.path(), "b/notes.txt", 10);

    fuzzdup()
        .arg("--quiet")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stderr(predicate::str::contains("visiting").not());
}

/// Test a high score limit suppresses every match
#[test]
fn test_score_limit_filters_matches() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a/notes.txt", 10);
    write_file(temp_dir.path(), "b/notes.txt", 10);

    fuzzdup()
        .arg("--limit-score")
        .arg("100000")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
