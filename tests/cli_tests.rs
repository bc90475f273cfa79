//! Integration tests for the subclip binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn subclip() -> Command {
    Command::cargo_bin("subclip").unwrap()
}

fn fake_source(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"fake video data").unwrap();
    path
}

#[test]
fn rejects_malformed_timestamp() {
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "input.mp4");

    subclip()
        .arg("cut")
        .arg("--input")
        .arg(&input)
        .args(["--start", "five seconds", "--end", "00:00:10"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Time must be in HH:MM:SS or HH:MM:SS.mmm format.",
        ));
}

#[test]
fn rejects_out_of_range_clock_components() {
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "input.mp4");

    subclip()
        .arg("cut")
        .arg("--input")
        .arg(&input)
        .args(["--start", "25:61:61", "--end", "26:00:00"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Time must be in HH:MM:SS or HH:MM:SS.mmm format.",
        ));
}

#[test]
fn rejects_reversed_range() {
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "input.mp4");

    subclip()
        .arg("cut")
        .arg("--input")
        .arg(&input)
        .args(["--start", "00:00:05", "--end", "00:00:02"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be less than end time"));
}

#[test]
fn rejects_missing_input() {
    let dir = TempDir::new().unwrap();

    subclip()
        .arg("cut")
        .args(["--input", "/no/such/file.mp4"])
        .args(["--start", "00:00:00", "--end", "00:00:03"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn rejects_unsupported_container() {
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "notes.txt");

    subclip()
        .arg("cut")
        .arg("--input")
        .arg(&input)
        .args(["--start", "00:00:00", "--end", "00:00:03"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported container"));
}

#[test]
fn reports_export_failure_for_unreadable_media() {
    // Garbage bytes in an .mp4 wrapper pass validation and fail at the
    // export boundary
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "input.mp4");

    subclip()
        .arg("cut")
        .arg("--input")
        .arg(&input)
        .args(["--start", "00:00:00", "--end", "00:00:03"])
        .arg("--output")
        .arg(dir.path().join("out.mp4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Video export failed"));
}

#[test]
fn cut_requires_arguments() {
    subclip().arg("cut").assert().failure();
}

#[test]
fn inspect_rejects_missing_input() {
    subclip()
        .arg("inspect")
        .args(["--input", "/no/such/file.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn inspect_rejects_unreadable_media() {
    let dir = TempDir::new().unwrap();
    let input = fake_source(&dir, "input.mp4");

    subclip()
        .arg("inspect")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to probe media file"));
}

#[test]
fn prints_help() {
    subclip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cut"));
}
