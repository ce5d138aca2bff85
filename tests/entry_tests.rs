//! Integration tests for writing, showing, listing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{in_diary, init_diary, write_entry};

fn stored_entries(root: &std::path::Path) -> serde_json::Value {
    let blob = fs::read_to_string(root.join(".moodiary/diaryEntries")).unwrap();
    serde_json::from_str(&blob).unwrap()
}

#[test]
fn test_write_and_show_entry() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args([
            "write",
            "--date",
            "2025-01-17",
            "--mood",
            "happy",
            "--content",
            "  Long walk by the river  ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved successfully!"))
        .stdout(predicate::str::contains("5 words"));

    in_diary(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 17, 2025"))
        .stdout(predicate::str::contains("Happy"))
        .stdout(predicate::str::contains("Long walk by the river"));

    let entries = stored_entries(temp.path());
    let list = entries.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["date"], "2025-01-17");
    assert_eq!(list[0]["mood"], "Happy");
    assert_eq!(list[0]["content"], "Long walk by the river");
    assert_eq!(list[0]["wordCount"], 5);
}

#[test]
fn test_rewrite_same_day_keeps_id() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    write_entry(temp.path(), "2025-01-17", "happy", "first version");
    let first_id = stored_entries(temp.path())[0]["id"].clone();

    in_diary(temp.path())
        .args(["write", "-d", "2025-01-17", "-m", "sad", "-c", "second version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated successfully!"));

    let entries = stored_entries(temp.path());
    let list = entries.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], first_id);
    assert_eq!(list[0]["mood"], "Sad");
    assert_eq!(list[0]["content"], "second version");
}

#[test]
fn test_write_content_from_stdin() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["write", "--date", "2025-02-01", "--mood", "content"])
        .write_stdin("line one\nline two\n")
        .assert()
        .success();

    let entries = stored_entries(temp.path());
    assert_eq!(entries[0]["content"], "line one\nline two");
    assert_eq!(entries[0]["wordCount"], 4);
}

#[test]
fn test_write_requires_mood() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["write", "--content", "no mood here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please select a mood!"));

    assert!(!temp.path().join(".moodiary/diaryEntries").exists());
}

#[test]
fn test_write_rejects_blank_content() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["write", "--mood", "happy", "--content", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please write something in your diary!"));
}

#[test]
fn test_write_rejects_unknown_mood_and_bad_date() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["write", "--mood", "meh", "--content", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Valid moods"));

    in_diary(temp.path())
        .args(["write", "--date", "2025-02-30", "--mood", "sad", "--content", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_show_missing_entry() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["show", "2025-01-01"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No entry found for 2025-01-01"));
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    write_entry(temp.path(), "2025-01-15", "sad", "rain");
    write_entry(temp.path(), "2025-01-20", "ecstatic", "trip booked");
    write_entry(temp.path(), "2025-01-10", "angry", "traffic");

    let output = in_diary(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2025-01-20"));
    assert!(lines[1].starts_with("2025-01-15"));
    assert!(lines[2].starts_with("2025-01-10"));
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());
    write_entry(temp.path(), "2025-01-15", "sad", "rain");
    write_entry(temp.path(), "2025-01-16", "happy", "sun");

    in_diary(temp.path())
        .args(["delete", "2025-01-15", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted successfully!"));

    let entries = stored_entries(temp.path());
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["date"], "2025-01-16");
}

#[test]
fn test_delete_prompt_declined() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());
    write_entry(temp.path(), "2025-01-15", "sad", "rain");

    in_diary(temp.path())
        .args(["delete", "2025-01-15"])
        .write_stdin("n\n")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Are you sure"));

    assert_eq!(stored_entries(temp.path()).as_array().unwrap().len(), 1);
}

#[test]
fn test_delete_prompt_accepted() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());
    write_entry(temp.path(), "2025-01-15", "sad", "rain");

    in_diary(temp.path())
        .args(["delete", "2025-01-15"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(stored_entries(temp.path()).as_array().unwrap().is_empty());
}

#[test]
fn test_delete_missing_entry() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());
    write_entry(temp.path(), "2025-01-15", "sad", "rain");

    in_diary(temp.path())
        .args(["delete", "2025-01-14", "--yes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No entry found"));

    assert_eq!(stored_entries(temp.path()).as_array().unwrap().len(), 1);
}

#[test]
fn test_reset_requires_both_confirmations() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());
    write_entry(temp.path(), "2025-01-15", "sad", "rain");

    in_diary(temp.path())
        .arg("reset")
        .write_stdin("y\nn\n")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("absolutely sure"));
    assert_eq!(stored_entries(temp.path()).as_array().unwrap().len(), 1);

    in_diary(temp.path())
        .arg("reset")
        .write_stdin("y\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset!"));
    assert!(stored_entries(temp.path()).as_array().unwrap().is_empty());

    in_diary(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
