// ABOUTME: Bearer credential extraction for route handlers
// ABOUTME: Required auth rejects missing or bad tokens; optional auth falls back to anonymous
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use axum::http::{header, HeaderMap};
use tracing::debug;

use crate::auth::{AuthManager, AuthResult};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

const BEARER_PREFIX: &str = "Bearer ";

/// Token from an `Authorization: Bearer <token>` header
///
/// # Errors
///
/// Returns `AUTH_MALFORMED` when the header is present but not a bearer credential
pub fn bearer_token(headers: &HeaderMap) -> AppResult<Option<&str>> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| AppError::auth_malformed("Authorization header is not valid text"))?;
    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Some)
        .ok_or_else(|| AppError::auth_malformed("Authorization header must be a Bearer token"))
}

/// Authenticate a request that must carry a valid bearer token
///
/// # Errors
///
/// Returns `AUTH_REQUIRED` without a token, or the validation error for a bad one
pub fn require_auth(headers: &HeaderMap, auth_manager: &AuthManager) -> AppResult<AuthResult> {
    let token = bearer_token(headers)?.ok_or_else(AppError::auth_required)?;
    auth_manager.authenticate(token).inspect_err(|e| {
        AppLogger::log_security_event("token_rejected", &e.message, None);
    })
}

/// Identity of the caller when a valid bearer token is present
///
/// Missing, malformed or invalid tokens all yield `None`; the request
/// proceeds anonymously.
#[must_use]
pub fn optional_auth(headers: &HeaderMap, auth_manager: &AuthManager) -> Option<AuthResult> {
    let token = bearer_token(headers).ok().flatten()?;
    match auth_manager.authenticate(token) {
        Ok(auth) => Some(auth),
        Err(e) => {
            debug!(code = ?e.code, "Ignoring invalid optional bearer token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&HeaderMap::new()).unwrap(), None);
        assert_eq!(
            bearer_token(&headers_with("Bearer abc.def")).unwrap(),
            Some("abc.def")
        );
        assert!(bearer_token(&headers_with("Basic abc")).is_err());
        assert!(bearer_token(&headers_with("Bearer ")).is_err());
    }

    #[test]
    fn test_require_auth_without_header() {
        let manager = AuthManager::new(b"secret", 1);
        let error = require_auth(&HeaderMap::new(), &manager).unwrap_err();
        assert_eq!(error.http_status(), 401);
    }

    #[test]
    fn test_optional_auth_ignores_bad_tokens() {
        let manager = AuthManager::new(b"secret", 1);
        assert!(optional_auth(&headers_with("Bearer junk"), &manager).is_none());
        assert!(optional_auth(&headers_with("Token junk"), &manager).is_none());
    }
}
