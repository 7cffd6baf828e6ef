//! End-to-end tests for the `pagewait` binary.
//!
//! None of these need Chrome: they cover validation failures, which happen
//! before any launch, and duration waits without a URL.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pagewait(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagewait").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_valid_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagewait.toml"),
        r#"
url = "blank.html"

[settings]
default_timeout = 5
poll_interval_ms = 50

[[steps]]
condition = "duration"
seconds = 1

[[steps]]
condition = "javascript"
javascript = "document.readyState === 'complete'"
timeout = 2
"#,
    )
    .unwrap();

    pagewait(&temp)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("step 2: javascript"));
}

#[test]
fn test_check_reports_every_invalid_step() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("waits.toml"),
        r#"
[[steps]]
condition = "duration"

[[steps]]
condition = "sleep"
seconds = 1
"#,
    )
    .unwrap();

    pagewait(&temp)
        .args(["check", "waits.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step 1"))
        .stderr(predicate::str::contains("step 2"))
        .stderr(predicate::str::contains("2 invalid step(s)"));
}

#[test]
fn test_check_without_config_fails() {
    let temp = TempDir::new().unwrap();

    pagewait(&temp)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pagewait.toml found"));
}

#[test]
fn test_run_duration_without_seconds_fails_fast() {
    let temp = TempDir::new().unwrap();

    pagewait(&temp)
        .args(["run", "--condition", "duration", "--url", "http://127.0.0.1:9/"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("seconds"));
}

#[test]
fn test_run_rejects_field_of_other_condition() {
    let temp = TempDir::new().unwrap();

    pagewait(&temp)
        .args(["run", "-c", "duration", "-s", "1", "-j", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("javascript"));
}

#[test]
fn test_run_rejects_non_positive_seconds() {
    let temp = TempDir::new().unwrap();

    pagewait(&temp)
        .args(["run", "-c", "duration", "-s", "0"])
        .assert()
        .failure();
}

#[test]
fn test_run_duration_without_browser() {
    let temp = TempDir::new().unwrap();

    let start = std::time::Instant::now();
    pagewait(&temp)
        .args(["run", "-c", "duration", "-s", "0.2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("satisfied"));
    assert!(start.elapsed() >= std::time::Duration::from_millis(200));
}

#[test]
fn test_invalid_setting_in_env_is_reported() {
    let temp = TempDir::new().unwrap();

    pagewait(&temp)
        .args(["run", "-c", "duration", "-s", "0.1"])
        .env("PAGEWAIT_SETTINGS__POLL_INTERVAL_MS", "0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll_interval_ms"));
}
