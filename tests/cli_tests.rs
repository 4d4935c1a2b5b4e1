//! CLI integration tests

use std::path::Path;
use std::process::Command;

/// Binary with config and credentials isolated from the host
fn accent_convert_bin(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_accent-convert"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("S3_BUCKET_NAME")
        .env_remove("SAGEMAKER_ENDPOINT_NAME")
        .env_remove("ACCENT_ENDPOINT_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accent"));
    assert!(stdout.contains("--record"));
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--accent"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--play"));
    assert!(stdout.contains("--max-duration"));
}

#[test]
fn version_output() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accent-convert"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accent-convert"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for action in ["init", "set", "get", "list", "path"] {
        assert!(stdout.contains(action), "missing '{}' in: {}", action, stdout);
    }
}

#[test]
fn config_set_then_get() {
    let home = tempfile::tempdir().unwrap();

    let output = accent_convert_bin(home.path())
        .args(["config", "set", "bucket", "voice-input"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(home.path().join("accent-convert").join("config.toml").exists());

    let output = accent_convert_bin(home.path())
        .args(["config", "get", "bucket"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "voice-input");
}

#[test]
fn config_list_masks_secrets() {
    let home = tempfile::tempdir().unwrap();

    let output = accent_convert_bin(home.path())
        .args(["config", "set", "aws_secret_access_key", "wJalrXUtnFEMIK7MDENGbPxRfiCY"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = accent_convert_bin(home.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wJal...fiCY"));
    assert!(!stdout.contains("wJalrXUtnFEMIK7MDENGbPxRfiCY"));
    assert!(stdout.contains("bucket"));
    assert!(stdout.contains("(not set)"));
}

#[test]
fn config_init_twice_fails() {
    let home = tempfile::tempdir().unwrap();

    let first = accent_convert_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = accent_convert_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}

#[test]
fn invalid_accent_error() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .args(["--accent", "scottish"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scottish"), "got: {}", stderr);
}

#[test]
fn invalid_max_duration_error() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .args(["--record", "--max-duration", "forever"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid duration") || stderr.contains("max_duration"),
        "Expected error about invalid duration, got: {}",
        stderr
    );
}

#[test]
fn record_and_input_are_exclusive() {
    let home = tempfile::tempdir().unwrap();
    let output = accent_convert_bin(home.path())
        .args(["--record", "--input", "clip.wav"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
