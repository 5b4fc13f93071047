// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness answers unconditionally; readiness pings the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Health check routes
//!
//! `/health` reports that the process is serving. `/ready` additionally
//! checks the database and answers 503 while it is unreachable.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::routes::{HEALTH, READY};
use crate::constants::service_names::RECIPEBOOK_SERVER;
use crate::resources::ServerResources;

/// Health or readiness status body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, `ready` or `unavailable`
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Time of the check (RFC 3339)
    pub timestamp: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_owned(),
            service: RECIPEBOOK_SERVER.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(HEALTH, get(Self::handle_health))
            .route(READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse::new("healthy"))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.health_check().await {
            Ok(()) => (StatusCode::OK, Json(HealthResponse::new("ready"))).into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(HealthResponse::new("unavailable")),
                )
                    .into_response()
            }
        }
    }
}
