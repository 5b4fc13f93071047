// ABOUTME: Route module organization for the RecipeBook HTTP API
// ABOUTME: Assembles domain routers and the shared middleware stack into one application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Route module for the RecipeBook backend
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the database managers and the auth service.

/// Account routes
pub mod auth;
/// Health check and readiness routes
pub mod health;
/// Recipe review routes
pub mod reviews;
/// Saved recipe routes
pub mod saved_recipes;

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, middleware, Json, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub use auth::{AuthResponse, AuthRoutes, AuthService, LoginRequest, MeResponse, RegisterRequest};
pub use health::{HealthResponse, HealthRoutes};
pub use reviews::{ReviewListQuery, ReviewListResponse, ReviewRoutes};
pub use saved_recipes::{DeleteSavedResponse, SavedRecipesResponse, SavedRecipesRoutes};

use crate::constants::limits::MAX_REQUEST_BODY_BYTES;
use crate::errors::{AppError, AppResult};
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;

/// Unwrap a JSON body, reporting malformed input as a 400 validation error
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(SavedRecipesRoutes::routes(Arc::clone(&resources)))
        .merge(ReviewRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}
