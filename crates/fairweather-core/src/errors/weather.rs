// ABOUTME: Forecast supplier error kinds with HTTP status mapping and retry advice
// ABOUTME: Classifies network, location, rate-limit, format, and credential failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a caller should react to a failed forecast fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryAdvice {
    /// Retrying the same request cannot succeed
    DoNotRetry,
    /// Retry only after backing off
    Backoff,
    /// Transient failure, a later retry may succeed
    RetryLater,
}

/// Forecast supplier errors
///
/// Messages are user-facing; they are shown verbatim as the request's error detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    /// The weather service could not be reached at all
    #[error("{0}")]
    Unreachable(String),

    /// The provider has no forecast for the requested location
    #[error("{0}")]
    NotFound(String),

    /// The provider is throttling requests
    #[error("{0}")]
    RateLimited(String),

    /// The provider answered but the payload is unusable
    #[error("{0}")]
    UpstreamFormat(String),

    /// The provider answered with an unexpected HTTP status
    #[error("{message}")]
    UpstreamStatus {
        /// Status returned by the provider
        status: u16,
        /// User-facing message
        message: String,
    },

    /// The provider rejected the configured credentials
    #[error("{0}")]
    Authentication(String),

    /// No API key is configured
    #[error("OPENWEATHER_API_KEY environment variable must be set to contact OpenWeather.")]
    MissingApiKey,

    /// The location string cannot be turned into a provider query
    #[error("{0}")]
    InvalidLocation(String),
}

impl WeatherError {
    /// HTTP status the response layer should use for this failure
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Unreachable(_) => 503,
            Self::NotFound(_) | Self::InvalidLocation(_) => 400,
            Self::RateLimited(_) => 429,
            Self::UpstreamFormat(_) | Self::UpstreamStatus { .. } => 502,
            Self::Authentication(_) | Self::MissingApiKey => 500,
        }
    }

    /// Suggested retry behaviour for this failure
    #[must_use]
    pub const fn retry_advice(&self) -> RetryAdvice {
        match self {
            Self::Authentication(_)
            | Self::MissingApiKey
            | Self::NotFound(_)
            | Self::InvalidLocation(_) => RetryAdvice::DoNotRetry,
            Self::RateLimited(_) => RetryAdvice::Backoff,
            Self::Unreachable(_) | Self::UpstreamFormat(_) | Self::UpstreamStatus { .. } => {
                RetryAdvice::RetryLater
            }
        }
    }

    /// Whether any retry is worthwhile
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self.retry_advice(), RetryAdvice::DoNotRetry)
    }

    /// Matching application error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unreachable(_) => ErrorCode::ExternalServiceUnavailable,
            Self::NotFound(_) => ErrorCode::ResourceNotFound,
            Self::RateLimited(_) => ErrorCode::ExternalRateLimited,
            Self::UpstreamFormat(_) | Self::UpstreamStatus { .. } => {
                ErrorCode::ExternalServiceError
            }
            Self::Authentication(_) => ErrorCode::ExternalAuthFailed,
            Self::MissingApiKey => ErrorCode::ConfigMissing,
            Self::InvalidLocation(_) => ErrorCode::InvalidInput,
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(error: WeatherError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }
}
