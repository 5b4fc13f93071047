// ABOUTME: Recipe provider error types with quota detection
// ABOUTME: Converts provider failures into AppError with user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Provider Error Types
//!
//! - `ProviderError` - failures talking to the third-party recipe provider
//! - Conversion to `AppError`; quota failures keep the message browsing users see

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::messages::PROVIDER_QUOTA_EXCEEDED;

/// Errors raised by recipe provider clients
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Provider refused the call because the API quota is used up
    #[error("{provider} quota exceeded (HTTP {status})")]
    QuotaExceeded {
        /// Provider name
        provider: String,
        /// HTTP status returned by the provider
        status: u16,
    },
    /// Provider answered with a non-success status
    #[error("{provider} API error (HTTP {status}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status returned by the provider
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Requested recipe does not exist at the provider
    #[error("{resource} not found at {provider}")]
    NotFound {
        /// Provider name
        provider: String,
        /// Resource description
        resource: String,
    },
    /// Transport failure before a response arrived
    #[error("Network error contacting {provider}: {message}")]
    Network {
        /// Provider name
        provider: String,
        /// Transport error text
        message: String,
    },
    /// Response body did not match the expected shape
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        /// Provider name
        provider: String,
        /// Decoder error text
        message: String,
    },
    /// Client has no API key configured
    #[error("{provider} API key is not configured")]
    MissingApiKey {
        /// Provider name
        provider: String,
    },
}

impl ProviderError {
    /// Classify a non-success HTTP status from the provider
    #[must_use]
    pub fn from_status(provider: &str, status: u16, message: impl Into<String>) -> Self {
        match status {
            // Spoonacular signals an exhausted daily quota with 402
            402 | 429 => Self::QuotaExceeded {
                provider: provider.to_owned(),
                status,
            },
            _ => Self::ApiError {
                provider: provider.to_owned(),
                status,
                message: message.into(),
            },
        }
    }

    /// Whether this failure is a quota rejection
    #[must_use]
    pub const fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

#[cfg(feature = "provider-errors")]
impl ProviderError {
    /// Map a reqwest transport or decode failure
    #[must_use]
    pub fn from_reqwest(provider: &str, error: &reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Parse {
                provider: provider.to_owned(),
                message: error.to_string(),
            };
        }
        if let Some(status) = error.status() {
            return Self::from_status(provider, status.as_u16(), error.to_string());
        }
        Self::Network {
            provider: provider.to_owned(),
            message: error.to_string(),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match &error {
            ProviderError::QuotaExceeded { .. } => {
                Self::new(ErrorCode::QuotaExceeded, PROVIDER_QUOTA_EXCEEDED)
            }
            ProviderError::NotFound { resource, .. } => Self::not_found(resource.clone()),
            ProviderError::Network { provider, message } => {
                Self::external_unavailable(provider.clone(), message.clone())
            }
            ProviderError::MissingApiKey { .. } => {
                Self::new(ErrorCode::ConfigMissing, error.to_string())
            }
            ProviderError::ApiError { provider, .. } | ProviderError::Parse { provider, .. } => {
                Self::external_service(provider.clone(), error.to_string())
            }
        }
    }
}
