// ABOUTME: Review route handlers for submitting and paging recipe reviews
// ABOUTME: Submission accepts an optional bearer token; listing is public
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::constants::reviews::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::middleware::optional_auth;
use crate::models::{Review, ReviewAuthor, ReviewSubmission};
use crate::resources::ServerResources;
use crate::routes::json_body;
use crate::routes::saved_recipes::parse_recipe_id;

/// Query parameters for GET /api/reviews/:recipe_id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewListQuery {
    /// Page size, 1..=50
    pub limit: Option<i64>,
    /// Rows to skip
    pub offset: Option<i64>,
}

impl ReviewListQuery {
    /// Validated `(limit, offset)`
    ///
    /// # Errors
    ///
    /// Returns a validation error for a limit outside 1..=50 or a negative offset
    pub fn resolve(&self) -> AppResult<(u32, u32)> {
        let limit = self.limit.unwrap_or_else(|| i64::from(DEFAULT_LIMIT));
        let limit = u32::try_from(limit)
            .ok()
            .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            .ok_or_else(|| {
                AppError::out_of_range(format!("limit must be between 1 and {MAX_LIMIT}"))
            })?;
        let offset = u32::try_from(self.offset.unwrap_or(0))
            .map_err(|_| AppError::out_of_range("offset must be zero or greater"))?;
        Ok((limit, offset))
    }
}

/// Response for GET /api/reviews/:recipe_id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListResponse {
    /// Reviews, signed-in authors first, each group newest first
    pub reviews: Vec<Review>,
    /// Page size used
    pub limit: u32,
    /// Offset used
    pub offset: u32,
    /// Whether another page exists
    pub has_more: bool,
}

/// Review routes
pub struct ReviewRoutes;

impl ReviewRoutes {
    /// Create all review routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/reviews", post(Self::handle_create))
            .route("/api/reviews/:recipe_id", get(Self::handle_list))
            .with_state(resources)
    }

    /// Resolve the signed-in author, if any
    async fn author(
        resources: &ServerResources,
        headers: &HeaderMap,
    ) -> AppResult<Option<ReviewAuthor>> {
        let Some(auth) = optional_auth(headers, &resources.auth_manager) else {
            return Ok(None);
        };
        let user = resources.database.users().get(auth.user_id).await?;
        Ok(user.map(|user| ReviewAuthor {
            user_id: user.id,
            name: user.name,
        }))
    }

    /// Handle POST /api/reviews
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ReviewSubmission>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let submission = json_body(payload)?;
        let author = Self::author(&resources, &headers).await?;
        let review = submission.validate(author)?;

        let stored = resources.database.reviews().create(review).await?;

        AppLogger::log_recipe_event(
            stored.user_id.map(|id| id.to_string()).as_deref(),
            stored.recipe_id,
            "reviewed",
        );
        Ok((StatusCode::CREATED, Json(stored)).into_response())
    }

    /// Handle GET /api/reviews/:recipe_id
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<String>,
        query: Result<Query<ReviewListQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let recipe_id = parse_recipe_id(&recipe_id)?;
        let Query(query) =
            query.map_err(|e| AppError::invalid_input(format!("Invalid query: {e}")))?;
        let (limit, offset) = query.resolve()?;

        let page = resources
            .database
            .reviews()
            .list(recipe_id, limit, offset)
            .await?;

        let response = ReviewListResponse {
            reviews: page.reviews,
            limit,
            offset,
            has_more: page.has_more,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
