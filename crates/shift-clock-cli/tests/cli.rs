//! End-to-end tests for the `shift-clock` binary.
//!
//! Every invocation points `--config` at a scratch directory so tests never
//! touch the real user configuration. Assertions on `status` check snapshot
//! shape and invariants, not wall-clock-dependent values.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn config_file(dir: &TempDir) -> PathBuf {
    dir.path().join("config.json")
}

fn shift_clock(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shift-clock").unwrap();
    cmd.arg("--config").arg(config_file(dir));
    cmd
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11:30"))
        .stdout(predicate::str::contains("16:00"))
        .stdout(predicate::str::contains("Asia/Shanghai"));
}

#[test]
fn config_set_round_trips_through_show() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .args(["config", "set", "home", "17:45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17:45"));

    shift_clock(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17:45"));
}

#[test]
fn config_set_rejects_malformed_time() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .args(["config", "set", "rest", "9:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time of day"));

    // Nothing was written.
    assert!(!config_file(&dir).exists());
}

#[test]
fn config_set_rejects_out_of_range_time() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .args(["config", "set", "home", "24:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time of day"));
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(config_file(&dir), "{ not json").unwrap();

    shift_clock(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11:30"))
        .stdout(predicate::str::contains("16:00"));
}

#[test]
fn legacy_two_field_config_is_accepted() {
    let dir = TempDir::new().unwrap();
    fs::write(config_file(&dir), r#"{"rest":"12:00","home":"17:30"}"#).unwrap();

    shift_clock(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17:30"))
        .stdout(predicate::str::contains("Asia/Shanghai"));
}

#[test]
fn status_prints_both_schedules() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest"))
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn status_json_emits_well_formed_snapshots() {
    let dir = TempDir::new().unwrap();
    let output = shift_clock(&dir)
        .args(["status", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    for key in ["rest", "home"] {
        let snapshot = &value[key];
        assert!(snapshot["diff_text"].is_string(), "{key} missing diff_text");
        assert!(snapshot["status"].is_string(), "{key} missing status");
        assert!(snapshot["is_completed"].is_boolean());
        let progress = snapshot["progress"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&progress), "progress {progress}");
        let remaining = snapshot["remaining_seconds"].as_i64().unwrap();
        assert!(remaining >= 0);
        assert_eq!(snapshot["is_completed"].as_bool().unwrap(), remaining == 0);
    }
}

#[test]
fn watch_with_count_terminates() {
    let dir = TempDir::new().unwrap();
    shift_clock(&dir)
        .args(["watch", "--count", "1"])
        .assert()
        .success();
}

#[test]
fn unknown_timezone_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    // Load-time validation rejects the zone, so the loader falls back to
    // defaults and watch still runs.
    fs::write(
        config_file(&dir),
        r#"{"rest":"11:30","home":"16:00","timezone":"Mars/Olympus"}"#,
    )
    .unwrap();

    shift_clock(&dir)
        .args(["watch", "--count", "1"])
        .assert()
        .success();
}
