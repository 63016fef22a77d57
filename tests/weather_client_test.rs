// ABOUTME: Integration tests for forecast parsing, ZIP normalization, and error classification
// ABOUTME: Also exercises the static provider's file loading and the live client's offline failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{block, openweather_body, pleasant_forecast};
use fairweather::config::WeatherApiConfig;
use fairweather::errors::{ErrorCode, RetryAdvice, WeatherError};
use fairweather::weather::{
    classify_status, normalize_zip, parse_forecast, ForecastProvider, OpenWeatherClient,
    StaticForecastProvider,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_normalize_zip_variants() {
    assert_eq!(normalize_zip("94110").unwrap(), "94110,US");
    assert_eq!(normalize_zip("  94110-1234 ").unwrap(), "941101234,US");
    assert_eq!(normalize_zip("10115, de").unwrap(), "10115,DE");
    assert_eq!(normalize_zip("94110,").unwrap(), "94110,US");
}

#[test]
fn test_normalize_zip_rejections() {
    assert_eq!(
        normalize_zip("   ").unwrap_err(),
        WeatherError::InvalidLocation("ZIP code is required.".into())
    );
    assert_eq!(
        normalize_zip("1234").unwrap_err(),
        WeatherError::InvalidLocation("ZIP code must include 5 or 9 digits.".into())
    );
    assert!(normalize_zip("123456").is_err());
}

#[test]
fn test_parse_forecast_extracts_samples_and_offset() {
    let mut samples = pleasant_forecast(3);
    samples[1] = samples[1].with_rain(0.7);
    let forecast = parse_forecast(&openweather_body(&samples, -14_400)).unwrap();

    assert_eq!(forecast.samples, samples);
    assert_eq!(forecast.timezone_offset, -14_400);
}

#[test]
fn test_parse_forecast_tolerates_loose_entries() {
    let body = r#"{
        "list": [
            {"dt": 1693526400, "main": {"temp": 71.3, "humidity": 44}},
            {"main": {"temp": 70.0}},
            {"dt": 1693537200, "main": {"temp": 69.0}, "rain": 1.5},
            {"dt": 1693548000, "main": {}, "rain": {"1h": 0.2}}
        ]
    }"#;
    let forecast = parse_forecast(body).unwrap();

    assert_eq!(forecast.samples.len(), 3);
    assert_eq!(forecast.timezone_offset, 0);
    assert_eq!(forecast.samples[0].humidity_percent, Some(44));
    assert!((forecast.samples[0].rain_amount).abs() < f64::EPSILON);
    assert!((forecast.samples[1].rain_amount - 1.5).abs() < f64::EPSILON);
    assert_eq!(forecast.samples[2].temperature, None);
    assert!((forecast.samples[2].rain_amount).abs() < f64::EPSILON);
}

#[test]
fn test_parse_forecast_errors() {
    assert_eq!(
        parse_forecast("<html>").unwrap_err(),
        WeatherError::UpstreamFormat("Weather service returned invalid JSON.".into())
    );
    assert_eq!(
        parse_forecast(r#"{"cod": "404", "message": "city not found"}"#).unwrap_err(),
        WeatherError::UpstreamFormat("Weather API error: city not found".into())
    );
    assert_eq!(
        parse_forecast("[]").unwrap_err(),
        WeatherError::UpstreamFormat("Weather API error: Unknown error from weather API.".into())
    );
}

#[test]
fn test_classify_status_maps_known_codes() {
    let auth = classify_status(401, r#"{"cod": 401, "message": "Invalid API key."}"#, "94110");
    assert!(matches!(auth, WeatherError::Authentication(_)));
    assert_eq!(auth.http_status(), 500);
    assert!(auth.to_string().ends_with(" Details: Invalid API key."));
    assert_eq!(auth.retry_advice(), RetryAdvice::DoNotRetry);

    let missing = classify_status(404, r#"{"message": "city not found"}"#, "00000");
    assert_eq!(
        missing.to_string(),
        "No forecast data found for ZIP code '00000'. Please confirm the location. Details: city not found"
    );
    assert_eq!(missing.http_status(), 400);

    let limited = classify_status(429, "", "94110");
    assert_eq!(
        limited.to_string(),
        "OpenWeather request limit exceeded. Please wait before retrying."
    );
    assert_eq!(limited.retry_advice(), RetryAdvice::Backoff);
    assert!(limited.is_retryable());
}

#[test]
fn test_classify_status_other_codes_use_body_text() {
    let error = classify_status(503, "  upstream maintenance  ", "94110");
    assert_eq!(
        error,
        WeatherError::UpstreamStatus {
            status: 503,
            message: "OpenWeather API request failed with status 503. Details: upstream maintenance"
                .into(),
        }
    );
    assert_eq!(error.http_status(), 502);
    assert_eq!(error.retry_advice(), RetryAdvice::RetryLater);
}

#[test]
fn test_classify_status_truncates_long_detail() {
    let body = "e".repeat(500);
    let message = classify_status(500, &body, "94110").to_string();
    let detail = message.split(" Details: ").nth(1).unwrap();
    assert_eq!(detail.chars().count(), 200);
    assert!(detail.ends_with("..."));
}

#[tokio::test]
async fn test_static_provider_loads_forecast_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("forecast.json");
    fs::write(&path, openweather_body(&pleasant_forecast(4), 3600)).unwrap();

    let provider = StaticForecastProvider::from_json_file(&path).await.unwrap();
    let forecast = provider.fetch_forecast("ignored").await.unwrap();
    assert_eq!(forecast.samples.len(), 4);
    assert_eq!(forecast.samples[0], block(0));
    assert_eq!(forecast.timezone_offset, 3600);

    let shifted = provider.with_timezone_offset(-7200);
    assert_eq!(shifted.fetch_forecast("x").await.unwrap().timezone_offset, -7200);
}

#[tokio::test]
async fn test_static_provider_missing_file_is_format_error() {
    let dir = TempDir::new().unwrap();
    let error = StaticForecastProvider::from_json_file(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(error, WeatherError::UpstreamFormat(_)));
}

#[tokio::test]
async fn test_failing_static_provider_returns_error() {
    let provider = StaticForecastProvider::failing(WeatherError::RateLimited("slow down".into()));
    let error = provider.fetch_forecast("94110").await.unwrap_err();
    assert_eq!(error.error_code(), ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_live_client_without_key_fails_before_network() {
    let client = OpenWeatherClient::new(WeatherApiConfig::default());
    assert_eq!(
        client.fetch_forecast("94110").await.unwrap_err(),
        WeatherError::MissingApiKey
    );
    assert!(matches!(
        client.fetch_forecast("12").await.unwrap_err(),
        WeatherError::InvalidLocation(_)
    ));
}

#[tokio::test]
async fn test_live_client_unreachable_host() {
    let client = OpenWeatherClient::new(WeatherApiConfig {
        api_key: Some("test-key".into()),
        base_url: "http://127.0.0.1:9".into(),
        request_timeout_secs: 2,
        connect_timeout_secs: 2,
        ..WeatherApiConfig::default()
    });
    let error = client.fetch_forecast("94110").await.unwrap_err();
    assert_eq!(
        error,
        WeatherError::Unreachable("Unable to reach weather service.".into())
    );
    assert_eq!(error.http_status(), 503);
}
