//! The compiled binary driven over stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn contact_book_cmd(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("contact-book").expect("Failed to find contact-book binary");
    cmd.env("CONTACT_BOOK_PATH", data_file)
        .env("LOG_LEVEL", "off")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_session_over_stdin() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("book.json");

    contact_book_cmd(&data_file)
        .write_stdin("hello\nadd Alice 1234567890\nphone alice\nbogus\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains(
            "Added alice with phone number 1234567890",
        ))
        .stdout(predicate::str::contains(
            "alice's phone number is 1234567890",
        ))
        .stdout(predicate::str::contains("Unknown command"));

    let contents = fs::read_to_string(&data_file).unwrap();
    assert!(contents.contains("\"alice\""));
}

#[test]
fn test_contacts_survive_restart() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("book.json");

    contact_book_cmd(&data_file)
        .write_stdin("add bob 5555555555\nadd bob 1111111111\ngood bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));

    contact_book_cmd(&data_file)
        .write_stdin("show all\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bob: 5555555555, 1111111111"));
}

#[test]
fn test_empty_path_is_rejected() {
    let dir = tempdir().unwrap();
    contact_book_cmd(&dir.path().join("unused.json"))
        .env("CONTACT_BOOK_PATH", " ")
        .write_stdin(".\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONTACT_BOOK_PATH"));
}
