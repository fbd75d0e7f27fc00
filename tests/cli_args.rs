//! Tests for CLI argument handling against the built binary.
//!
//! Every case exits before the terminal is touched, so they run headless.

mod common;

use common::temp_config;
use std::process::Command;

fn escape_epic_cmd() -> (tempfile::TempDir, Command) {
    // Point at a config that does not exist so the user's own file is ignored.
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_escape-epic"));
    cmd.arg("--config").arg(dir.path().join("missing.toml"));
    (dir, cmd)
}

#[test]
fn test_help_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_escape-epic"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--page", "--interval-ms", "--log-file", "--list-pages"] {
        assert!(stdout.contains(flag), "help is missing {}", flag);
    }
}

#[test]
fn test_list_pages_prints_every_path() {
    let (_dir, mut cmd) = escape_epic_cmd();
    let output = cmd.arg("--list-pages").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let paths: Vec<&str> = stdout.lines().collect();
    for expected in ["/", "/destinations", "/destinations/japan", "/blog", "/about", "/contact"] {
        assert!(paths.contains(&expected), "missing {} in {:?}", expected, paths);
    }
}

#[test]
fn test_unknown_page_exits_with_error() {
    let (_dir, mut cmd) = escape_epic_cmd();
    let output = cmd
        .arg("--page")
        .arg("/nonexistent_page_xyz")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Page '/nonexistent_page_xyz' not found"));
    assert!(stderr.contains("Available pages:"));
    assert!(stderr.contains("/destinations"));
}

#[test]
fn test_invalid_config_fails_before_ui() {
    let (_dir, path) = temp_config("[page]\nscroll_step = 0\n");
    let output = Command::new(env!("CARGO_BIN_EXE_escape-epic"))
        .arg("--config")
        .arg(&path)
        .arg("--list-pages")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scroll_step"), "stderr: {}", stderr);
}

#[test]
fn test_non_numeric_interval_is_rejected() {
    let (_dir, mut cmd) = escape_epic_cmd();
    let output = cmd
        .arg("--interval-ms")
        .arg("soon")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unusable_outbox_fails_before_ui() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A regular file cannot be the outbox's parent directory.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").expect("write blocker");
    let outbox = blocker.join("outbox.jsonl");
    let (_config_dir, path) = temp_config(&format!(
        "[contact]\noutbox = {:?}\n",
        outbox.display().to_string()
    ));

    let output = Command::new(env!("CARGO_BIN_EXE_escape-epic"))
        .arg("--config")
        .arg(&path)
        .arg("--log-file")
        .arg(dir.path().join("escape-epic.log"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("opening contact outbox"), "stderr: {}", stderr);
}
