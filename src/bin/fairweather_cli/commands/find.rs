// ABOUTME: find command for fairweather-cli
// ABOUTME: Validates task flags, picks a live or file forecast provider, prints the suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use anyhow::{Context, Result};
use clap::Args;
use fairweather::config::ServerConfig;
use fairweather::scheduling::TimeWindowScanner;
use fairweather::tasks::{SuggestionService, TaskRequest, ValidatedTask};
use fairweather::weather::{ForecastProvider, OpenWeatherClient, StaticForecastProvider};
use std::path::PathBuf;
use tracing::info;

/// Task constraints and forecast source
#[derive(Args, Debug)]
pub struct FindArgs {
    /// ZIP code, optionally with a country suffix (e.g. `10115,DE`)
    #[arg(long)]
    zip: String,

    /// Required contiguous hours
    #[arg(long)]
    duration: i64,

    /// Task name shown in logs
    #[arg(long, default_value = "outdoor task")]
    name: String,

    /// Minimum temperature (°F)
    #[arg(long)]
    min_temp: Option<f64>,

    /// Maximum temperature (°F)
    #[arg(long)]
    max_temp: Option<f64>,

    /// Minimum relative humidity (%)
    #[arg(long)]
    min_humidity: Option<i64>,

    /// Maximum relative humidity (%)
    #[arg(long)]
    max_humidity: Option<i64>,

    /// Accept blocks with forecast rain
    #[arg(long)]
    allow_rain: bool,

    /// Earliest local start time, HH:MM
    #[arg(long)]
    earliest: Option<String>,

    /// Latest local start time, HH:MM
    #[arg(long)]
    latest: Option<String>,

    /// Read an `OpenWeather` forecast response from this file instead of the API
    #[arg(long)]
    forecast_file: Option<PathBuf>,

    /// Override the forecast's UTC offset in seconds (file mode only)
    #[arg(long, allow_hyphen_values = true)]
    timezone_offset: Option<i64>,
}

impl FindArgs {
    fn task_request(&self) -> TaskRequest {
        TaskRequest {
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            min_humidity: self.min_humidity,
            max_humidity: self.max_humidity,
            no_rain: !self.allow_rain,
            earliest_start: self.earliest.clone(),
            latest_start: self.latest.clone(),
            ..TaskRequest::new(self.name.clone(), self.zip.clone(), self.duration)
        }
    }
}

/// Run the window search and print the suggestion as pretty JSON
pub async fn run(args: FindArgs) -> Result<()> {
    let task = args.task_request().validate()?;
    let config = ServerConfig::from_env()?;
    let scanner = config.scanner.scanner();

    if let Some(path) = &args.forecast_file {
        let provider = StaticForecastProvider::from_json_file(path)
            .await
            .with_context(|| format!("Failed to load forecast from {}", path.display()))?;
        let provider = match args.timezone_offset {
            Some(offset) => provider.with_timezone_offset(offset),
            None => provider,
        };
        suggest_and_print(provider, scanner, &task).await
    } else {
        suggest_and_print(OpenWeatherClient::from_config(&config), scanner, &task).await
    }
}

async fn suggest_and_print<P: ForecastProvider>(
    provider: P,
    scanner: TimeWindowScanner,
    task: &ValidatedTask,
) -> Result<()> {
    info!(provider = provider.name(), task = %task.name, "Searching for weather windows");
    let service = SuggestionService::new(provider).with_scanner(scanner);
    let suggestion = service.suggest(task).await?;
    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
