// ABOUTME: Task requests and window suggestions built on the scanning engine
// ABOUTME: Validation happens here so the engine only ever sees well-formed constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

/// Task request model and validation
pub mod request;
/// Forecast fetch plus scan into a suggestion response
pub mod suggestions;

pub use request::{TaskRequest, ValidatedTask};
pub use suggestions::{Suggestion, SuggestionService};
