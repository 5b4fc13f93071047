// ABOUTME: Bearer credential issuing and validation plus password hashing
// ABOUTME: HS256 JWTs scoped to the recipebook audience, bcrypt for stored passwords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Authentication
//!
//! Users sign in with email and password and receive a signed bearer token.
//! The token carries the user id and email and expires after the configured
//! number of hours. Validation distinguishes expired, forged and unreadable
//! tokens so clients can tell "sign in again" from "bad request".

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::auth::JWT_AUDIENCE;
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

/// A freshly issued bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded token
    pub token: String,
    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

/// Identity proven by a valid bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Authenticated user `ID`
    pub user_id: Uuid,
    /// Email the token was issued to
    pub email: String,
}

/// Issues and validates bearer tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a manager signing with `secret`
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Token lifetime in hours
    #[must_use]
    pub const fn token_expiry_hours(&self) -> i64 {
        self.token_expiry_hours
    }

    /// Generate a `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an internal error if encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_expiry_hours);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            aud: JWT_AUDIENCE.to_owned(),
        };
        let token = self.encode_claims(&claims)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Sign arbitrary claims with this manager's key
    ///
    /// # Errors
    ///
    /// Returns an internal error if encoding fails
    pub fn encode_claims(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns `AUTH_EXPIRED` for an expired token, `AUTH_MALFORMED` for a
    /// token that cannot be decoded, and `AUTH_INVALID` otherwise
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_audience(&[JWT_AUDIENCE]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    /// Validate a token and extract the user identity
    ///
    /// # Errors
    ///
    /// Returns an auth error if the token is invalid or its subject is not a user id
    pub fn authenticate(&self, token: &str) -> AppResult<AuthResult> {
        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_malformed("Token subject is not a user id"))?;
        Ok(AuthResult {
            user_id,
            email: claims.email,
        })
    }

    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> AppError {
        debug!("JWT validation failed: {e:?}");
        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::auth_expired(),
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AppError::auth_malformed("Token format is invalid"),
            ErrorKind::InvalidSignature => {
                warn!("JWT signature verification failed");
                AppError::auth_invalid("Token signature verification failed")
            }
            _ => AppError::auth_invalid(format!("Token validation failed: {e}")),
        }
    }
}

/// Hash a password with bcrypt off the async runtime
///
/// # Errors
///
/// Returns an internal error if hashing fails
pub async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Check a password against a bcrypt hash off the async runtime
///
/// # Errors
///
/// Returns an internal error if the hash is unreadable
pub async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
}

/// Generate a random `JWT` secret
///
/// # Errors
///
/// Returns an error if the system RNG fails
pub fn generate_jwt_secret() -> AppResult<[u8; 64]> {
    let rng = SystemRandom::new();
    let mut secret = [0u8; 64];
    rng.fill(&mut secret)?;
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn test_user() -> User {
        User::new(
            "Ada".to_owned(),
            "ada@example.com".to_owned(),
            "hash".to_owned(),
        )
    }

    #[test]
    fn test_token_round_trip() {
        let manager = AuthManager::new(b"test-secret", 24);
        let user = test_user();
        let issued = manager.generate_token(&user).unwrap();

        let auth = manager.authenticate(&issued.token).unwrap();
        assert_eq!(auth.user_id, user.id);
        assert_eq!(auth.email, "ada@example.com");
        assert!(issued.expires_at > Utc::now());
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = AuthManager::new(b"test-secret", 24);
        let past = Utc::now() - Duration::hours(2);
        let token = manager
            .encode_claims(&Claims {
                sub: Uuid::new_v4().to_string(),
                email: "old@example.com".to_owned(),
                iat: (past - Duration::hours(1)).timestamp(),
                exp: past.timestamp(),
                aud: JWT_AUDIENCE.to_owned(),
            })
            .unwrap();

        let error = manager.validate_token(&token).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthExpired);
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let issuer = AuthManager::new(b"one-secret", 24);
        let verifier = AuthManager::new(b"another-secret", 24);
        let issued = issuer.generate_token(&test_user()).unwrap();

        let error = verifier.validate_token(&issued.token).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let manager = AuthManager::new(b"test-secret", 24);
        let error = manager.validate_token("not-a-jwt").unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthMalformed);
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let hash = hash_password("hunter22".to_owned()).await.unwrap();
        assert!(verify_password("hunter22".to_owned(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_owned(), hash).await.unwrap());
    }

    #[test]
    fn test_generated_secrets_differ() {
        assert_ne!(generate_jwt_secret().unwrap(), generate_jwt_secret().unwrap());
    }
}
