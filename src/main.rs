//! quakeplot - Plot recent earthquakes from the USGS feeds
//!
//! `update` downloads the day, week and month feeds and renders a map for each;
//! `display` opens one of those maps in the default browser.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quakeplot::app::App;
use quakeplot::cli::{self, Cli, Command, DisplayChoice};
use quakeplot::data::Timeframe;

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::config_from_cli(&cli)?;

    match cli.command {
        Command::Update => {
            let app = App::new(&config)?;
            let report = app.update().await;

            if !report.is_success() {
                for error in &report.failed {
                    eprintln!("Error: {}", error);
                }
                return Err(format!(
                    "{} of {} timeframes failed to update",
                    report.failed.len(),
                    Timeframe::all().len()
                )
                .into());
            }
            println!("Updated data and plots.");
        }
        Command::Display { timeframe } => {
            let choice = match timeframe {
                Some(arg) => cli::parse_display_arg(&arg)?,
                None => cli::prompt_display_choice(io::stdin().lock(), io::stdout())?,
            };

            if let DisplayChoice::Show(timeframe) = choice {
                App::new(&config)?.display(timeframe)?;
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    // main prints a returned error with `Debug`; keep the readable message.
    run(cli).await.map_err(|e| e.to_string().into())
}
