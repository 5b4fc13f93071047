// ABOUTME: Environment-driven configuration tests for the server and terminal client
// ABOUTME: Serialized because they mutate process-wide environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::env;

use recipebook_server::config::client::ClientConfig;
use recipebook_server::config::environment::ServerConfig;
use serial_test::serial;

const SERVER_KEYS: [&str; 6] = [
    "HTTP_PORT",
    "PORT",
    "HOST",
    "DATABASE_URL",
    "JWT_EXPIRY_HOURS",
    "CORS_ALLOWED_ORIGINS",
];

fn clear(keys: &[&str]) {
    for key in keys {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_server_overrides_from_env() {
    clear(&SERVER_KEYS);
    env::set_var("PORT", "8080");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("JWT_EXPIRY_HOURS", "48");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://recipes.example");

    let config = ServerConfig::from_env().unwrap();
    clear(&SERVER_KEYS);

    assert_eq!(config.http_port, 8080);
    assert!(config.database.url.is_memory());
    assert_eq!(config.auth.jwt_expiry_hours, 48);
    assert_eq!(config.cors.allowed_origins, vec!["https://recipes.example"]);
}

#[test]
#[serial]
fn test_http_port_takes_precedence_over_port() {
    clear(&SERVER_KEYS);
    env::set_var("HTTP_PORT", "7000");
    env::set_var("PORT", "8080");

    let config = ServerConfig::from_env().unwrap();
    clear(&SERVER_KEYS);

    assert_eq!(config.http_port, 7000);
}

#[test]
#[serial]
fn test_client_reads_backend_url_and_provider_key() {
    env::set_var("RECIPEBOOK_API_URL", "http://recipes.internal:9000");
    env::set_var("SPOONACULAR_API_KEY", "abc123");
    env::set_var("RECIPE_CACHE_TTL_SECS", "60");

    let config = ClientConfig::from_env();
    for key in ["RECIPEBOOK_API_URL", "SPOONACULAR_API_KEY", "RECIPE_CACHE_TTL_SECS"] {
        env::remove_var(key);
    }

    let config = config.unwrap();
    assert_eq!(config.api_base_url.port(), Some(9000));
    assert!(config.has_provider_key());
    assert_eq!(config.spoonacular.cache_ttl_secs, 60);
}

#[test]
#[serial]
fn test_client_defaults_without_env() {
    for key in ["RECIPEBOOK_API_URL", "SPOONACULAR_API_KEY"] {
        env::remove_var(key);
    }

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:5000/");
    assert!(!config.has_provider_key());
}

#[test]
#[serial]
fn test_client_rejects_invalid_backend_url() {
    env::set_var("RECIPEBOOK_API_URL", "ftp://recipes.example");
    let result = ClientConfig::from_env();
    env::remove_var("RECIPEBOOK_API_URL");

    assert!(result.is_err());
}
