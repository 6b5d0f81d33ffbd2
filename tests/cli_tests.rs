//! Drives the binary over stdin with a temporary list directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn phrasetrain(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("phrasetrain").unwrap();
    cmd.arg("--dir")
        .arg(dir.path().join("lists"))
        .arg("--no-clear")
        .arg("--seed")
        .arg("1");
    cmd
}

fn write_list(dir: &TempDir, name: &str, content: &str) {
    let lists = dir.path().join("lists");
    fs::create_dir_all(&lists).unwrap();
    fs::write(lists.join(format!("{name}.txt")), content).unwrap();
}

#[test]
fn quit_exits_cleanly_and_creates_directory() {
    let dir = TempDir::new().unwrap();
    phrasetrain(&dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("L - Load a previous phrase list"))
        .stdout(predicate::str::contains("Q - Quit the program"));
    assert!(dir.path().join("lists").is_dir());
}

#[test]
fn closed_stdin_fails() {
    let dir = TempDir::new().unwrap();
    phrasetrain(&dir).write_stdin("").assert().failure();
}

#[test]
fn create_add_save_round_trip() {
    let dir = TempDir::new().unwrap();
    phrasetrain(&dir)
        .write_stdin("c\nbasics\nEnglish\nSpanish\nm\na\ncat\ngato\n\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. cat -> gato"));

    let saved = fs::read_to_string(dir.path().join("lists/basics.txt")).unwrap();
    assert_eq!(saved, "English:Spanish\ncat:gato");

    phrasetrain(&dir)
        .write_stdin("l\n1\nm\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modify 'basics' (English -> Spanish)"))
        .stdout(predicate::str::contains("1. cat -> gato"));
}

#[test]
fn malformed_list_reports_logical_line() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "broken", "# my list\n\nen:fr\nhi:salut\nbadline\n");
    phrasetrain(&dir)
        .write_stdin("l\n1\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("please check line 3 for syntax errors"));
}

#[test]
fn single_phrase_practice_scores_answer() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "tiny", "English:French\nhello:bonjour");
    phrasetrain(&dir)
        .write_stdin("l\n1\np\n1\nn\n1\nbonjour\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is \"hello\" in French?"))
        .stdout(predicate::str::contains("Your final score: 1/1 (100%)"))
        .stdout(predicate::str::contains("job!"));
}

#[test]
fn unsaved_changes_prompt_on_quit_saves() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "tiny", "English:French\nhello:bonjour");
    phrasetrain(&dir)
        .write_stdin("l\n1\nm\na\nyes\noui\n\nq\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PhraseTrain | tiny*"))
        .stdout(predicate::str::contains("You have unsaved changes"));

    let saved = fs::read_to_string(dir.path().join("lists/tiny.txt")).unwrap();
    assert_eq!(saved, "English:French\nhello:bonjour\nyes:oui");
}
