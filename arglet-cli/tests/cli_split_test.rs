use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn split_prints_one_token_per_line() {
    Command::cargo_bin("arglet")
        .unwrap()
        .args(["split", r#"move --from "a b" --verbose"#])
        .assert()
        .success()
        .stdout("move\n--from\na b\n--verbose\n");
}

#[test]
fn split_json_prints_an_array() {
    Command::cargo_bin("arglet")
        .unwrap()
        .args(["split", "--output", "json", r#"foo "bar baz""#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["foo","bar baz"]"#));
}

#[test]
fn split_tolerates_dangling_quote() {
    Command::cargo_bin("arglet")
        .unwrap()
        .args(["split", r#"foo""#])
        .assert()
        .success()
        .stdout("foo\n");
}

#[test]
fn settings_prints_defaults() {
    Command::cargo_bin("arglet")
        .unwrap()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("allow_unbundling"))
        .stdout(predicate::str::contains("require_all"));
}

#[test]
fn settings_fails_on_missing_file() {
    Command::cargo_bin("arglet")
        .unwrap()
        .args(["settings", "--file", "no/such/file.json"])
        .assert()
        .failure();
}
