// tests/cli_test.rs
use std::process::Command;

#[test]
fn test_release_tagger_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tagger", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-tagger"));
    assert!(stdout.contains("next release tag"));
}

#[test]
fn test_release_tagger_version() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tagger", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-tagger"));
}

#[test]
fn test_unreadable_config_exits_nonzero() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "release-tagger",
            "--",
            "--config",
            "/nonexistent/release-tagger.toml",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
