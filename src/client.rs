// ABOUTME: Typed HTTP client for the RecipeBook REST API
// ABOUTME: Attaches the bearer token and turns error bodies back into AppError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Backend REST client
//!
//! Every backend endpoint has a method here. Failures come back as
//! [`AppError`] with the code the server reported, so callers can match on
//! [`ErrorCode`] the same way handlers do.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use crate::models::{Review, ReviewSubmission, SaveRecipeRequest, SavedRecipe};
use crate::routes::{
    AuthResponse, DeleteSavedResponse, HealthResponse, LoginRequest, MeResponse,
    RegisterRequest, ReviewListResponse, SavedRecipesResponse,
};

/// Client for the RecipeBook backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
    token: Option<String>,
}

impl BackendClient {
    /// Client for the backend at `base_url`, without credentials
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or clear the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Current bearer token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `POST /api/auth/register`
    ///
    /// # Errors
    ///
    /// Returns the server's validation or conflict error, or a transport error
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        Self::send(self.request(Method::POST, "/api/auth/register").json(request))
            .await
    }

    /// `POST /api/auth/login`
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` for bad credentials, or a transport error
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        Self::send(self.request(Method::POST, "/api/auth/login").json(request))
            .await
    }

    /// `GET /api/auth/me`
    ///
    /// # Errors
    ///
    /// Returns an authentication error when the token is missing or rejected
    pub async fn me(&self) -> AppResult<MeResponse> {
        Self::send(self.request(Method::GET, "/api/auth/me")).await
    }

    /// `POST /api/recipes/save`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` when the recipe is already saved
    pub async fn save_recipe(&self, request: &SaveRecipeRequest) -> AppResult<SavedRecipe> {
        Self::send(self.request(Method::POST, "/api/recipes/save").json(request))
            .await
    }

    /// `DELETE /api/recipes/save/:recipe_id`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the recipe was not saved
    pub async fn unsave_recipe(&self, recipe_id: u64) -> AppResult<DeleteSavedResponse> {
        let path = format!("/api/recipes/save/{recipe_id}");
        Self::send(self.request(Method::DELETE, &path)).await
    }

    /// `GET /api/recipes/saved`
    ///
    /// # Errors
    ///
    /// Returns an authentication error when the token is missing or rejected
    pub async fn saved_recipes(&self) -> AppResult<SavedRecipesResponse> {
        Self::send(self.request(Method::GET, "/api/recipes/saved"))
            .await
    }

    /// `POST /api/reviews`; signed in when a token is attached
    ///
    /// # Errors
    ///
    /// Returns the server's validation error for a bad rating or comment
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> AppResult<Review> {
        Self::send(self.request(Method::POST, "/api/reviews").json(submission))
            .await
    }

    /// `GET /api/reviews/:recipe_id`
    ///
    /// # Errors
    ///
    /// Returns the server's validation error for an out-of-range limit
    pub async fn reviews(
        &self,
        recipe_id: u64,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> AppResult<ReviewListResponse> {
        let path = format!("/api/reviews/{recipe_id}");
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset));
        }
        Self::send(self.request(Method::GET, &path).query(&query))
            .await
    }

    /// `GET /ready`
    ///
    /// # Errors
    ///
    /// Returns `EXTERNAL_SERVICE_UNAVAILABLE` while the backend is not ready
    pub async fn ready(&self) -> AppResult<HealthResponse> {
        Self::send(self.request(Method::GET, "/ready")).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "Backend request");
        let builder = self.http_client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> AppResult<T> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(error_from_response(response).await)
    }
}

/// Decode a failed response into an [`AppError`]
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return AppError::from(e),
    };

    serde_json::from_slice::<ErrorResponse>(&body).map_or_else(
        |_| {
            let text = String::from_utf8_lossy(&body);
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_owned()
            } else {
                text.trim().to_owned()
            };
            AppError::new(code_for_status(status), message)
        },
        AppError::from,
    )
}

/// Closest error code for a status without a structured body
const fn code_for_status(status: StatusCode) -> ErrorCode {
    match status.as_u16() {
        400 => ErrorCode::InvalidInput,
        401 => ErrorCode::AuthInvalid,
        404 => ErrorCode::ResourceNotFound,
        409 => ErrorCode::ResourceAlreadyExists,
        429 => ErrorCode::QuotaExceeded,
        503 => ErrorCode::ExternalServiceUnavailable,
        _ => ErrorCode::ExternalServiceError,
    }
}
