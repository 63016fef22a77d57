// ABOUTME: Configuration management module for Fairweather runtime settings
// ABOUTME: Environment-driven forecast API, scanner, and logging configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! Configuration module
//!
//! Configuration is read from environment variables only; see
//! [`environment::ServerConfig::from_env`].

/// Environment configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ScannerConfig, ServerConfig, WeatherApiConfig};
