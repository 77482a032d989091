use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home)
        .env_remove("SHELF_LOG")
        .arg("--no-color");
    cmd
}

fn add(home: &Path, args: &[&str]) {
    shelf(home).arg("add").args(args).assert().success();
}

#[test]
fn empty_library_prompts_to_add() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your library is empty"))
        .stdout(predicate::str::contains("shelf add"));
}

#[test]
fn add_then_list_persists_to_disk() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "--title", "Dune", "--author", "Frank Herbert"])
        .args(["--status", "read", "--rating", "4", "--comment", "Great read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Dune\""));

    let stored = std::fs::read_to_string(temp_dir.path().join("library-books.json")).unwrap();
    assert!(stored.contains("\"status\": \"Read\""));
    assert!(stored.contains("\"rating\": 4"));

    shelf(temp_dir.path())
        .args(["list", "--layout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("★★★★☆"))
        .stdout(predicate::str::contains("Great read"));
}

#[test]
fn missing_author_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "--title", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!temp_dir.path().join("library-books.json").exists());
}

#[test]
fn rating_for_unread_book_is_ignored_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["add", "-t", "Emma", "-a", "Jane Austen", "--rating", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ratings can only be given"));

    shelf(temp_dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Want to read"))
        .stdout(predicate::str::contains("Rating:").not());
}

#[test]
fn search_and_status_filters() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), &["-t", "Emma", "-a", "Jane Austen", "-s", "reading"]);
    add(temp_dir.path(), &["-t", "Dune", "-a", "Frank Herbert"]);

    shelf(temp_dir.path())
        .args(["list", "--search", "AUSTEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Dune").not())
        .stdout(predicate::str::contains("Showing 1 of 2 books"));

    shelf(temp_dir.path())
        .args(["list", "--status", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"))
        .stdout(predicate::str::contains("shelf add").not());
}

#[test]
fn edit_away_from_read_clears_review() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(
        temp_dir.path(),
        &["-t", "Dune", "-a", "Frank Herbert", "-s", "read", "-r", "5", "-c", "Loved it"],
    );

    shelf(temp_dir.path())
        .args(["edit", "1", "--status", "reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated \"Dune\""));

    let stored = std::fs::read_to_string(temp_dir.path().join("library-books.json")).unwrap();
    assert!(stored.contains("\"rating\": 0"));
    assert!(!stored.contains("Loved it"));
}

#[test]
fn delete_requires_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), &["-t", "Dune", "-a", "Frank Herbert"]);

    shelf(temp_dir.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    shelf(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Dune\""));

    shelf(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Total\s+0").unwrap());
}

#[test]
fn unknown_book_reference_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["show", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book at position 7"));
}

#[test]
fn stats_count_each_status() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), &["-t", "Emma", "-a", "Jane Austen", "-s", "reading"]);
    add(temp_dir.path(), &["-t", "Dune", "-a", "Frank Herbert", "-s", "read"]);
    add(temp_dir.path(), &["-t", "Ulysses", "-a", "James Joyce"]);

    shelf(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Want to read\s+1").unwrap())
        .stdout(predicate::str::is_match(r"Reading\s+1").unwrap())
        .stdout(predicate::str::is_match(r"Total\s+3").unwrap());
}

#[test]
fn config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelf(temp_dir.path())
        .args(["config", "layout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("layout set to list"));

    shelf(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("layout = list"))
        .stdout(predicate::str::contains("compact = false"));

    shelf(temp_dir.path())
        .args(["config", "layout", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid layout"));
}

#[test]
fn corrupt_store_loads_as_empty_library() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("library-books.json"), "{ not json").unwrap();

    shelf(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your library is empty"));
}
