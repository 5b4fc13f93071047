// ABOUTME: System-wide constants and environment-based configuration values
// ABOUTME: Re-exports core limits and provides env getters for server and client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! Domain limits live in `recipebook_core::constants` and are re-exported here.

pub use recipebook_core::constants::{auth, browse, messages, ports, provider, reviews, routes};

/// Service names used in structured logs
pub mod service_names {
    /// Backend service
    pub const RECIPEBOOK_SERVER: &str = "recipebook-server";
    /// Terminal client
    pub const RECIPEBOOK_CLI: &str = "recipebook-cli";
}

/// Defaults applied when environment variables are absent
pub mod defaults {
    /// Bind host for the backend
    pub const HOST: &str = "127.0.0.1";
    /// `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipebook.db";
    /// Browser origins allowed by CORS (local dev servers)
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:5174";
    /// Backend base URL used by the terminal client
    pub const API_BASE_URL: &str = "http://127.0.0.1:5000";
}

/// Server-side request limits
pub mod limits {
    /// Largest accepted request body (recipe snapshots included)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// `SQLite` connection pool size for file databases
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    use super::{auth, defaults, ports, provider};

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.into())
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into())
    }

    /// Get `JWT` signing secret from environment
    #[must_use]
    pub fn jwt_secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|secret| !secret.is_empty())
    }

    /// Get `JWT` expiry hours from environment or default
    #[must_use]
    pub fn jwt_expiry_hours() -> i64 {
        env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(auth::DEFAULT_JWT_EXPIRY_HOURS)
    }

    /// Get CORS allowed origins (comma separated, or `*`)
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.into())
    }

    /// Get Spoonacular API key from environment
    #[must_use]
    pub fn spoonacular_api_key() -> Option<String> {
        env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
    }

    /// Get Spoonacular base `URL` from environment or default
    #[must_use]
    pub fn spoonacular_base_url() -> String {
        env::var("SPOONACULAR_BASE_URL").unwrap_or_else(|_| provider::SPOONACULAR_BASE_URL.into())
    }

    /// Get recipe detail cache lifetime from environment or default
    #[must_use]
    pub fn recipe_cache_ttl_secs() -> u64 {
        env::var("RECIPE_CACHE_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(provider::DEFAULT_CACHE_TTL_SECS)
    }

    /// Get backend base `URL` for the terminal client
    #[must_use]
    pub fn api_base_url() -> String {
        env::var("RECIPEBOOK_API_URL").unwrap_or_else(|_| defaults::API_BASE_URL.into())
    }
}
