// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, auth managers, routers, users and JSON request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipebook_server`

use std::env;
use std::sync::{Arc, Once};

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipebook_server::{
    auth::{generate_jwt_secret, hash_password, AuthManager},
    config::environment::{AuthConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment},
    config::ServerConfig,
    database::Database,
    models::User,
    resources::ServerResources,
    routes::build_router,
};
use serde_json::Value;
use tower::ServiceExt;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory database with all tables created
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::connect("sqlite::memory:").await
}

/// Token manager with a fresh random secret
pub fn create_test_auth_manager() -> AuthManager {
    let secret = generate_jwt_secret().unwrap();
    AuthManager::new(&secret, 24)
}

/// Configuration suitable for in-process tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        http_port: 5000,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        auth: AuthConfig {
            jwt_secret: None,
            jwt_expiry_hours: 24,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
        },
    }
}

/// Resources over an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        create_test_auth_manager(),
        Arc::new(test_config()),
    )))
}

/// Router and resources wired the way the server wires them
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    Ok((build_router(Arc::clone(&resources)), resources))
}

/// Insert a user with password `password123`
pub async fn create_test_user(database: &Database, name: &str, email: &str) -> Result<User> {
    let password_hash = hash_password("password123".to_owned()).await?;
    let user = User::new(name.to_owned(), email.to_owned(), password_hash);
    database.users().create(&user).await?;
    Ok(user)
}

/// Insert a user and return it with a valid bearer token
pub async fn create_test_user_with_token(
    resources: &ServerResources,
    name: &str,
    email: &str,
) -> Result<(User, String)> {
    let user = create_test_user(&resources.database, name, email).await?;
    let token = resources.auth_manager.generate_token(&user)?.token;
    Ok((user, token))
}

/// Send one request through `router` and decode the JSON body (`Null` when empty)
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}
