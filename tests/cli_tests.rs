//! CLI argument parsing integration tests

use std::process::Command;
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute cargo run")
}

#[test]
fn test_cli_no_arguments() {
    let output = run_cli(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:") || stderr.contains("required"));
}

#[test]
fn test_cli_one_argument() {
    let output = run_cli(&["manifest.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:") || stderr.contains("required"));
}

#[test]
fn test_cli_too_many_arguments() {
    let output = run_cli(&["manifest.txt", "target", "extra"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unexpected") || stderr.contains("Usage:"));
}

#[test]
fn test_cli_help_exits_zero() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_missing_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("no-such-manifest.txt");
    let target = temp_dir.path().join("target");

    let output = run_cli(&[manifest.to_str().unwrap(), target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read manifest file"));
    // Nothing was materialized before the fatal error.
    assert!(!target.exists());
}

#[test]
fn test_cli_manifest_without_recognizable_records() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("manifest.txt");
    std::fs::write(&manifest, "not-a-url\nabc123\nx\n").unwrap();
    let target = temp_dir.path().join("target");

    let output = run_cli(&[manifest.to_str().unwrap(), target.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No projects found in manifest"));
}

#[test]
fn test_cli_run_exits_zero_despite_project_failures() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("manifest.txt");
    // A repository that does not exist: the clone fails, the failure
    // is reported, and the process still exits 0.
    std::fs::write(
        &manifest,
        "git@github.com:acme/definitely-missing-repo-xyz.git\ndeadbeef\nreserved\n",
    )
    .unwrap();
    let target = temp_dir.path().join("target");

    let output = run_cli(&[manifest.to_str().unwrap(), target.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not clone"));
}
