//! Integration tests for the makechange binary
//!
//! Runs the binary against a temporary cache directory.

use std::process::Command;
use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_makechange"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute makechange")
}

fn cache_dir_arg(temp_dir: &TempDir) -> String {
    temp_dir.path().to_string_lossy().into_owned()
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("makechange"), "Help should mention makechange");
    assert!(stdout.contains("--denominations"), "Help should mention --denominations");
}

#[test]
fn test_us_coins_for_41() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = cache_dir_arg(&temp_dir);
    let output = run_cli(&["41", "--cache-dir", &dir]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("[1, 1, 1, 1]"));
    assert!(stdout.contains("total coins: 4"));
    assert!(temp_dir.path().join("make_change_1-5-10-25.json").exists());
}

#[test]
fn test_no_cache_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = cache_dir_arg(&temp_dir);
    let output = run_cli(&["6", "--no-cache", "--cache-dir", &dir]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("[1, 1, 0, 0]"));
    assert!(!temp_dir.path().join("make_change_1-5-10-25.json").exists());
}

#[test]
fn test_custom_denominations() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = cache_dir_arg(&temp_dir);
    let output = run_cli(&["4683", "-d", "1,5,10,25,100,500,1000,2000", "--cache-dir", &dir]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("[3, 1, 0, 3, 1, 1, 0, 2]"));
    assert!(stdout.contains("2 x 2000"));
}

#[test]
fn test_clear_then_solve_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = cache_dir_arg(&temp_dir);
    assert!(run_cli(&["30", "--cache-dir", &dir]).status.success());

    let output = run_cli(&["10", "--clear", "--cache-dir", &dir]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("[0, 0, 1, 0]"));
}

#[test]
fn test_negative_amount_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = cache_dir_arg(&temp_dir);
    let output = run_cli(&["-3", "--cache-dir", &dir]);

    assert!(!output.status.success(), "Expected negative amount to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidAmount"), "Should report invalid amount: {}", stderr);
}

#[test]
fn test_invalid_denominations_fail() {
    let output = run_cli(&["10", "-d", "10,5,1", "--no-cache"]);

    assert!(!output.status.success(), "Expected unsorted denominations to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidDenominations"), "Should report bad denominations: {}", stderr);
}

#[test]
fn test_unsolvable_fails() {
    let output = run_cli(&["3", "-d", "2,5", "--no-cache"]);

    assert!(!output.status.success(), "Expected missing unit coin to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsolvable"), "Should report unsolvable amount: {}", stderr);
}
