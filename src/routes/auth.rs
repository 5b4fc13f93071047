// ABOUTME: Account route handlers for registration, login and the current user
// ABOUTME: Issues bearer tokens on register and login; validates email, name and password
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{hash_password, verify_password, AuthManager};
use crate::constants::auth::{MAX_NAME_LENGTH, MIN_PASSWORD_LENGTH};
use crate::constants::messages::INVALID_CREDENTIALS;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::middleware::require_auth;
use crate::models::{User, UserInfo};
use crate::resources::ServerResources;
use crate::routes::json_body;

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Token and account returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    /// Token expiry (RFC 3339)
    pub expires_at: String,
    /// Account details
    pub user: UserInfo,
}

/// Current user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Account details
    pub user: UserInfo,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    database: Database,
    auth_manager: AuthManager,
}

impl AuthService {
    /// Create a service over the given database and token manager
    #[must_use]
    pub const fn new(database: Database, auth_manager: AuthManager) -> Self {
        Self {
            database,
            auth_manager,
        }
    }

    /// Create an account and sign it in
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad name, email or password, and a
    /// conflict error when the email is already registered
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::out_of_range(format!(
                "Name cannot exceed {MAX_NAME_LENGTH} characters"
            )));
        }
        let email = normalize_email(&request.email);
        if !Self::is_valid_email(&email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let password_hash = hash_password(request.password).await?;
        let user = User::new(name.to_owned(), email, password_hash);
        self.database.users().create(&user).await?;

        info!(user.id = %user.id, "User registered");
        AppLogger::log_auth_event(&user.id.to_string(), "register", true, None);
        self.issue(&user)
    }

    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` for an unknown email or a wrong password
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);
        let Some(user) = self.database.users().get_by_email(&email).await? else {
            AppLogger::log_auth_event("unknown", "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        if !verify_password(request.password, user.password_hash.clone()).await? {
            warn!(user.id = %user.id, "Login with wrong password");
            AppLogger::log_auth_event(&user.id.to_string(), "login", false, Some("wrong password"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        AppLogger::log_auth_event(&user.id.to_string(), "login", true, None);
        self.issue(&user)
    }

    /// Account behind a validated bearer token
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` if the account no longer exists
    pub async fn me(&self, user_id: Uuid) -> AppResult<MeResponse> {
        let user = self
            .database
            .users()
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Account no longer exists"))?;
        Ok(MeResponse {
            user: UserInfo::from(&user),
        })
    }

    /// Validate email format
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && !email.contains(char::is_whitespace)
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            && !domain.ends_with('.')
    }

    /// Validate password length
    #[must_use]
    pub fn is_valid_password(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LENGTH
    }

    fn issue(&self, user: &User) -> AppResult<AuthResponse> {
        let issued = self.auth_manager.generate_token(user)?;
        Ok(AuthResponse {
            token: issued.token,
            expires_at: issued.expires_at.to_rfc3339(),
            user: UserInfo::from(user),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/me", get(Self::handle_me))
            .with_state(resources)
    }

    fn service(resources: &ServerResources) -> AuthService {
        AuthService::new(resources.database.clone(), resources.auth_manager.clone())
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let response = Self::service(&resources).register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let response = Self::service(&resources).login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/auth/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = require_auth(&headers, &resources.auth_manager)?;
        let response = Self::service(&resources).me(auth.user_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
