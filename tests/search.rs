use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn default_search_output_right_answer() {
    let mut cmd = Command::cargo_bin("perfect-numbers").unwrap();

    cmd.assert().success().stdout(str::contains("6 28 496 8128"));
}

#[test]
fn bounded_search_output_right_answer() {
    let mut cmd = Command::cargo_bin("perfect-numbers").unwrap();
    cmd.arg("2");

    cmd.assert().success().stdout(str::contains("6 28"));
}
