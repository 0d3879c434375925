//! Black-box tests of the binary: exit codes, stderr diagnostics and the action log.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn sync_patterns() -> Command {
    let mut cmd = Command::cargo_bin("sync-patterns").unwrap();
    cmd.env_remove("SYNC_ACTORS")
        .env_remove("SYNC_PAUSE_MS")
        .env_remove("SYNC_CYCLES")
        .env("RUST_LOG", "warn");
    cmd
}

/// Bounded and without pauses, so the run finishes quickly
fn bounded(mode: &str, cycles: u32) -> Command {
    let mut cmd = sync_patterns();
    cmd.arg(mode)
        .env("SYNC_PAUSE_MS", "0")
        .env("SYNC_CYCLES", cycles.to_string());
    cmd
}

#[test]
fn test_unknown_mode_is_rejected() {
    sync_patterns()
        .arg("5")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("there's no mode 5"));
}

#[test]
fn test_non_numeric_mode_is_rejected() {
    sync_patterns()
        .arg("abc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("mode must be a number"));
}

#[test]
fn test_missing_mode_lists_the_modes() {
    sync_patterns()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no mode supplied"))
        .stderr(predicate::str::contains("3 (footman-dining)"));
}

#[test]
fn test_extra_arguments_are_rejected() {
    sync_patterns()
        .args(["1", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("single mode argument"));
}

#[test]
fn test_invalid_setting_is_rejected() {
    sync_patterns()
        .arg("3")
        .env("SYNC_ACTORS", "1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("SYNC_ACTORS"));
}

#[test]
fn test_readers_writers_log() {
    for mode in ["1", "2"] {
        let output = bounded(mode, 3).output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        // 5 readers and 5 writers, 3 cycles each
        assert_eq!(lines.len(), 30);
        for id in 1..=5 {
            let reading = format!("Reader {id}: Reading.");
            let writing = format!("Writer {id}: Writing.");
            assert_eq!(lines.iter().filter(|l| **l == reading).count(), 3);
            assert_eq!(lines.iter().filter(|l| **l == writing).count(), 3);
        }
    }
}

#[test]
fn test_dining_log() {
    for mode in ["3", "4"] {
        let output = bounded(mode, 4).env("SYNC_ACTORS", "7").output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let mut meals = [0; 7];
        for line in stdout.lines() {
            let id: usize = line
                .strip_prefix("Philosopher ")
                .and_then(|rest| rest.strip_suffix(": Eating."))
                .and_then(|id| id.parse().ok())
                .unwrap_or_else(|| panic!("unexpected line {line:?}"));
            meals[id - 1] += 1;
        }
        assert_eq!(meals, [4; 7]);
    }
}
