// ABOUTME: Command modules for fairweather-cli
// ABOUTME: Window search and configuration check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

pub mod check_config;
pub mod find;
