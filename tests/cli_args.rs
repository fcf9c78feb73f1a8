//! Integration tests for CLI argument handling
//!
//! Tests the `update` and `display` subcommands as run from the command line.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quakeplot"))
        .args(args)
        .output()
        .expect("Failed to execute quakeplot")
}

/// Helper to run the CLI feeding `input` on stdin
fn run_cli_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_quakeplot"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute quakeplot");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for quakeplot")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quakeplot"), "Help should mention quakeplot");
    assert!(stdout.contains("update"), "Help should mention update");
    assert!(stdout.contains("display"), "Help should mention display");
}

#[test]
fn test_display_quit_does_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let output = run_cli(&[
        "display",
        "--timeframe",
        "q",
        "--data-dir",
        data_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(!data_dir.exists(), "Quitting should not touch the data directory");
}

#[test]
fn test_display_invalid_timeframe_prints_error_and_exits() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&[
        "display",
        "--timeframe",
        "decade",
        "--data-dir",
        temp_dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success(), "Expected invalid timeframe to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid timeframe"),
        "Should print error message about invalid timeframe: {}",
        stderr
    );
}

#[test]
fn test_failure_reports_message_not_debug_form() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&[
        "display",
        "--timeframe",
        "decade",
        "--data-dir",
        temp_dir.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "Unexpected stderr: {}", stderr);
    assert!(stderr.contains("Valid choices: DAY, WEEK, MONTH, q"));
    assert!(!stderr.contains("InvalidTimeframe("), "Debug form leaked: {}", stderr);
}

#[test]
fn test_display_before_update_fails_with_hint() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&[
        "display",
        "--timeframe",
        "DAY",
        "--data-dir",
        temp_dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("quakeplot update"), "Should suggest running update: {}", stderr);
}

#[test]
fn test_display_prompts_when_timeframe_missing() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli_with_input(
        &["display", "--data-dir", temp_dir.path().to_str().unwrap()],
        "century\nQ\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Enter timeframe or 'q' to quit").count(), 2);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use quakeplot::cli::{parse_display_arg, Cli, Command, DisplayChoice};
    use quakeplot::data::Timeframe;

    #[test]
    fn test_cli_update_subcommand() {
        let cli = Cli::parse_from(["quakeplot", "update"]);
        assert_eq!(cli.command, Command::Update);
    }

    #[test]
    fn test_cli_display_subcommand_with_timeframe() {
        let cli = Cli::parse_from(["quakeplot", "display", "--timeframe", "week"]);
        match cli.command {
            Command::Display { timeframe } => assert_eq!(timeframe.as_deref(), Some("week")),
            other => panic!("Expected display, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_display_arg_week_returns_week() {
        assert_eq!(
            parse_display_arg("WEEK").unwrap(),
            DisplayChoice::Show(Timeframe::Week)
        );
    }

    #[test]
    fn test_parse_display_arg_invalid_returns_error() {
        assert!(parse_display_arg("invalid").is_err());
    }
}
