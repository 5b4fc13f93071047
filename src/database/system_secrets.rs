// ABOUTME: Persisted server secrets such as the generated JWT signing key
// ABOUTME: Generates a secret on first use so tokens survive restarts without JWT_SECRET
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use chrono::Utc;
use sqlx::Row;
use tracing::info;

use super::{format_timestamp, Database};
use crate::auth::generate_jwt_secret;
use crate::errors::{AppError, AppResult};

const JWT_SECRET_NAME: &str = "jwt_secret";

impl Database {
    /// Get the stored JWT secret, generating and storing one if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the RNG fails or the database is unavailable
    pub async fn get_or_create_jwt_secret(&self) -> AppResult<String> {
        if let Some(secret) = self.get_secret(JWT_SECRET_NAME).await? {
            return Ok(secret);
        }

        let generated = hex::encode(generate_jwt_secret()?);
        // A concurrent first start may have inserted already; keep whichever landed
        sqlx::query(
            r"
            INSERT INTO system_secrets (name, value, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(name) DO NOTHING
            ",
        )
        .bind(JWT_SECRET_NAME)
        .bind(&generated)
        .bind(format_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store JWT secret: {e}")))?;

        info!("Generated and stored a new JWT signing secret");
        self.get_secret(JWT_SECRET_NAME)
            .await?
            .ok_or_else(|| AppError::internal("JWT secret missing after insert"))
    }

    async fn get_secret(&self, name: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM system_secrets WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read secret {name}: {e}")))?;
        Ok(row.map(|row| row.get("value")))
    }
}
