// ABOUTME: Saved recipe route handlers for save, unsave and list
// ABOUTME: Every endpoint requires a bearer token and acts on the caller's own records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Saved recipes routes
//!
//! A saved record pairs the caller with a provider recipe id and an opaque
//! snapshot of the recipe. A recipe can be saved once per user.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::require_auth;
use crate::models::{SaveRecipeRequest, SavedRecipe};
use crate::resources::ServerResources;
use crate::routes::json_body;

/// Response for GET /api/recipes/saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipesResponse {
    /// Number of saved recipes
    pub count: usize,
    /// Saved recipes, newest first
    pub saved_recipes: Vec<SavedRecipe>,
}

/// Response for DELETE /api/recipes/save/:recipe_id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSavedResponse {
    /// Always true on success
    pub success: bool,
}

/// Saved recipes routes
pub struct SavedRecipesRoutes;

impl SavedRecipesRoutes {
    /// Create all saved recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/save", post(Self::handle_save))
            .route("/api/recipes/save/:recipe_id", delete(Self::handle_delete))
            .route("/api/recipes/saved", get(Self::handle_list))
            .with_state(resources)
    }

    /// Handle POST /api/recipes/save
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<SaveRecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let auth = require_auth(&headers, &resources.auth_manager)?;
        let request = json_body(payload)?;
        request.validate()?;

        let saved = resources
            .database
            .saved_recipes()
            .save(auth.user_id, &request)
            .await?;

        AppLogger::log_recipe_event(Some(&auth.user_id.to_string()), saved.recipe_id, "saved");
        Ok((StatusCode::CREATED, Json(saved)).into_response())
    }

    /// Handle DELETE /api/recipes/save/:recipe_id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = require_auth(&headers, &resources.auth_manager)?;
        let recipe_id = parse_recipe_id(&recipe_id)?;

        resources
            .database
            .saved_recipes()
            .delete(auth.user_id, recipe_id)
            .await?;

        AppLogger::log_recipe_event(Some(&auth.user_id.to_string()), recipe_id, "unsaved");
        Ok((StatusCode::OK, Json(DeleteSavedResponse { success: true })).into_response())
    }

    /// Handle GET /api/recipes/saved
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = require_auth(&headers, &resources.auth_manager)?;
        let saved_recipes = resources.database.saved_recipes().list(auth.user_id).await?;

        let response = SavedRecipesResponse {
            count: saved_recipes.len(),
            saved_recipes,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// Parse a positive provider recipe id from a path segment
pub(crate) fn parse_recipe_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input(format!("Invalid recipe id: {raw}")))
}
