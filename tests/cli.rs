#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::str::contains;

fn cli() -> Command {
    Command::cargo_bin("repertoire-cli").unwrap()
}

#[test]
fn birthdays_with_pinned_today() {
    cli()
        .args(["--today", "2024-06-10"])
        .write_stdin("add A 1111111111 15.06.1990\nadd B 2222222222 11.06.1995\nbirthdays\nexit\n")
        .assert()
        .success()
        .stdout(contains("2024-06-11: B\n2024-06-17: A"))
        .stdout(contains("Good bye!"));
}

#[test]
fn invalid_input_keeps_running_until_eof() {
    cli()
        .write_stdin("add Bob 12\nall\n")
        .assert()
        .success()
        .stdout(contains("Value error:"))
        .stdout(contains("No contacts found."));
}

#[test]
fn rejects_malformed_today() {
    cli().args(["--today", "10.06.2024"]).assert().failure();
}
