//! Tests for the `corpus-splitter` binary: exit status and output streams.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn splitter() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("corpus-splitter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_success_is_silent() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("input.tsv");
    fs::write(&source, "spam\tbuy now\nham\tsee you at noon\n").unwrap();

    splitter()
        .arg(&source)
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(tmp.path().join("ham").join("0001.txt")).unwrap(),
        "see you at noon\n"
    );
}

#[test]
fn test_malformed_line_fails_with_line_number() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("input.tsv");
    fs::write(&source, "spam\tbuy now\njusttext\n").unwrap();

    splitter()
        .arg(&source)
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("justtext"));

    assert!(tmp.path().join("spam").join("0000.txt").exists());
}

#[test]
fn test_missing_source_fails() {
    let tmp = tempfile::tempdir().unwrap();

    splitter()
        .arg(tmp.path().join("nope.tsv"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_missing_dest_root_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("input.tsv");
    fs::write(&source, "a\tfoo\n").unwrap();

    splitter()
        .arg(&source)
        .arg(tmp.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_wrong_argument_count_fails() {
    splitter().assert().failure();
    splitter().arg("only-one.tsv").assert().failure();
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("input.tsv");
    fs::write(&source, "a\tfoo\n").unwrap();

    splitter()
        .env("RUST_LOG", "debug")
        .arg(&source)
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("split complete"));
}
