// ABOUTME: Fairweather CLI - finds weather windows for an outdoor task from the command line
// ABOUTME: Fetches a live or file-based forecast, scans it, and prints the suggestion as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors
//!
//! Usage:
//! ```bash
//! # Six dry hours between 55F and 80F starting no earlier than 8 AM
//! fairweather-cli find --zip 94110 --duration 6 --min-temp 55 --max-temp 80 --earliest 08:00
//!
//! # Same search against a saved OpenWeather response
//! fairweather-cli find --zip 94110 --duration 6 --forecast-file forecast.json
//!
//! # Show the effective configuration (API key redacted)
//! fairweather-cli check-config
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::find::FindArgs;
use fairweather::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "fairweather-cli",
    about = "Find forecast windows for outdoor tasks",
    long_about = "Scans a 3-hour block forecast for contiguous windows that satisfy temperature, humidity, rain, duration, and start-time constraints."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search a forecast for windows matching a task
    Find(FindArgs),

    /// Load configuration from the environment and print a summary
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Find(args) => commands::find::run(args).await,
        Command::CheckConfig => commands::check_config::run(),
    }
}
