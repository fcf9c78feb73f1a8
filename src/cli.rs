//! Command-line interface parsing for quakeplot
//!
//! This module handles parsing of CLI arguments using clap: the `update` and
//! `display` subcommands, the global data directory and timeout options, and the
//! interactive timeframe prompt used when `display` is run without `--timeframe`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::data::Timeframe;

/// Prompt shown when no timeframe is given on the command line
pub const TIMEFRAME_PROMPT: &str = "Enter timeframe or 'q' to quit";

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified timeframe is not recognized
    #[error("Invalid timeframe: '{0}'. Valid choices: DAY, WEEK, MONTH, q")]
    InvalidTimeframe(String),

    /// Input ended before a valid timeframe was entered
    #[error("No timeframe entered")]
    NoInput,

    /// No data directory was given and none could be determined
    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDir,

    /// Reading the prompt answer failed
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// quakeplot - Plot recent earthquakes from the USGS feeds
#[derive(Parser, Debug)]
#[command(name = "quakeplot")]
#[command(about = "Fetch recent USGS earthquake feeds and plot them on a world map")]
#[command(version)]
pub struct Cli {
    /// Directory for cached feeds and plots (default: the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Timeout for each feed request, in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Update data (from the USGS website) and create plots
    Update,

    /// Display an earthquake plot by timeframe [DAY, WEEK, MONTH] or 'q' to quit
    Display {
        /// Timeframe to display; prompts when omitted
        ///
        /// Valid choices: DAY, WEEK, MONTH, q (case-insensitive)
        #[arg(long, value_name = "TIMEFRAME")]
        timeframe: Option<String>,
    },
}

/// What the user asked `display` to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChoice {
    /// Open the plot for a timeframe
    Show(Timeframe),
    /// Do nothing
    Quit,
}

/// Parses a timeframe selector into a DisplayChoice.
///
/// # Returns
/// * `Ok(DisplayChoice)` for DAY, WEEK, MONTH or q, in any case
/// * `Err(CliError::InvalidTimeframe)` otherwise
pub fn parse_display_arg(s: &str) -> Result<DisplayChoice, CliError> {
    if s.trim().eq_ignore_ascii_case("q") {
        return Ok(DisplayChoice::Quit);
    }
    Timeframe::from_str(s)
        .map(DisplayChoice::Show)
        .ok_or_else(|| CliError::InvalidTimeframe(s.trim().to_string()))
}

/// Prompts until the user enters a valid timeframe selector.
///
/// Invalid answers print an error and ask again.
///
/// # Returns
/// * `Ok(DisplayChoice)` once a valid answer is read
/// * `Err(CliError::NoInput)` if input ends first
pub fn prompt_display_choice<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<DisplayChoice, CliError> {
    let mut line = String::new();
    loop {
        write!(output, "{}: ", TIMEFRAME_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(CliError::NoInput);
        }

        match parse_display_arg(&line) {
            Ok(choice) => return Ok(choice),
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

/// Builds the runtime configuration from parsed CLI arguments.
///
/// # Returns
/// * `Ok(Config)` rooted at `--data-dir`, or the platform data directory
/// * `Err(CliError::NoDataDir)` if neither is available
pub fn config_from_cli(cli: &Cli) -> Result<Config, CliError> {
    let config = match &cli.data_dir {
        Some(dir) => Config::new(dir),
        None => Config::from_default_dir().ok_or(CliError::NoDataDir)?,
    };
    Ok(config.with_request_timeout(Duration::from_secs(cli.timeout)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_arg_timeframes() {
        assert_eq!(parse_display_arg("DAY").unwrap(), DisplayChoice::Show(Timeframe::Day));
        assert_eq!(parse_display_arg("week").unwrap(), DisplayChoice::Show(Timeframe::Week));
        assert_eq!(parse_display_arg("Month").unwrap(), DisplayChoice::Show(Timeframe::Month));
    }

    #[test]
    fn test_parse_display_arg_quit() {
        assert_eq!(parse_display_arg("q").unwrap(), DisplayChoice::Quit);
        assert_eq!(parse_display_arg("Q\n").unwrap(), DisplayChoice::Quit);
    }

    #[test]
    fn test_parse_display_arg_invalid() {
        let err = parse_display_arg("year").unwrap_err();
        assert!(err.to_string().contains("Invalid timeframe"));
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn test_prompt_accepts_first_valid_answer() {
        let mut output = Vec::new();
        let choice = prompt_display_choice(&b"week\n"[..], &mut output).unwrap();

        assert_eq!(choice, DisplayChoice::Show(Timeframe::Week));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter timeframe or 'q' to quit: ");
    }

    #[test]
    fn test_prompt_repeats_after_invalid_answer() {
        let mut output = Vec::new();
        let choice = prompt_display_choice(&b"decade\nq\n"[..], &mut output).unwrap();

        assert_eq!(choice, DisplayChoice::Quit);
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(TIMEFRAME_PROMPT).count(), 2);
        assert!(output.contains("Invalid timeframe: 'decade'"));
    }

    #[test]
    fn test_prompt_end_of_input() {
        let result = prompt_display_choice(&b"nope\n"[..], Vec::new());
        assert!(matches!(result, Err(CliError::NoInput)));
    }

    #[test]
    fn test_cli_parse_update() {
        let cli = Cli::parse_from(["quakeplot", "update"]);
        assert_eq!(cli.command, Command::Update);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_cli_parse_display_without_timeframe() {
        let cli = Cli::parse_from(["quakeplot", "display"]);
        assert_eq!(cli.command, Command::Display { timeframe: None });
    }

    #[test]
    fn test_cli_parse_display_with_timeframe() {
        let cli = Cli::parse_from(["quakeplot", "display", "--timeframe", "MONTH"]);
        assert_eq!(
            cli.command,
            Command::Display {
                timeframe: Some("MONTH".to_string())
            }
        );
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::parse_from(["quakeplot", "update", "--data-dir", "/tmp/q", "--timeout", "5"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/q")));

        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/q"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["quakeplot"]).is_err());
    }
}
