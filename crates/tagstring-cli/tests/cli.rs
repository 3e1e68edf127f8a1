//! Smoke tests for the `tagstr` binary.

use assert_cmd::Command;
use rstest::rstest;
use std::str;

#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn tagstr() -> Command {
    let mut cmd = Command::cargo_bin("tagstr").expect("binary exists");
    cmd.env_remove("TAGSTRING_LOG_LEVEL")
        .env_remove("TAGSTRING_SPACE_DELIMITER")
        .env_remove("TAGSTRING_MAX_COUNT");
    cmd
}

#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn stdout_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stdout).expect("utf8")
}

#[rstest]
#[case(&["normalize", "chris, \"adam brian\" , adam"], "\"adam brian\", adam, chris\n")]
#[case(&["parse", "adam brian"], "adam\nbrian\n")]
#[case(&["render", "adam", "brian chris"], "\"brian chris\", adam\n")]
#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn commands_print_results(#[case] args: &[&str], #[case] expected: &str) {
    let output = tagstr().args(args).output().expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), expected);
}

#[test]
#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn reads_input_from_stdin() {
    let output = tagstr()
        .arg("normalise")
        .write_stdin("brian adam\n")
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "adam, brian\n");
}

#[test]
#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn environment_configures_parsing() {
    let output = tagstr()
        .env("TAGSTRING_SPACE_DELIMITER", "false")
        .args(["parse", "adam brian"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "adam brian\n");
}

#[test]
#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn exceeding_the_tag_limit_fails() {
    let output = tagstr()
        .env("TAGSTRING_MAX_COUNT", "1")
        .args(["parse", "adam brian"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("this field can only have 1 argument"));
}

#[test]
#[expect(
    clippy::expect_used,
    reason = "behavioural tests use explicit panics for clarity"
)]
fn invalid_configuration_exits_with_status_two() {
    let output = tagstr()
        .env("TAGSTRING_MAX_COUNT", "many")
        .args(["parse", "adam"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
