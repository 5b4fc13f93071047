// ABOUTME: SQLite persistence for users, saved recipes, reviews and system secrets
// ABOUTME: Owns the connection pool, runs schema migrations and hands out table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Database Management
//!
//! A single [`Database`] owns the `SQLite` pool. Each table has a manager that
//! borrows a clone of the pool, following one pattern: runtime `sqlx::query`
//! with bound parameters and a `row_to_*` mapper. UUIDs and timestamps are
//! stored as TEXT; timestamps use fixed-width RFC 3339 so they sort as strings.

mod reviews;
mod saved_recipes;
mod system_secrets;
mod users;

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

pub use reviews::{ReviewPage, ReviewsManager};
pub use saved_recipes::SavedRecipesManager;
pub use users::UsersManager;

use crate::config::environment::DatabaseUrl;
use crate::constants::limits::DATABASE_MAX_CONNECTIONS;
use crate::errors::{AppError, AppResult};

/// Connection pool plus schema
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `url` and run migrations
    ///
    /// File databases are created (with their parent directory) when missing.
    /// In-memory databases use a single connection so every query sees the
    /// same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())
            .with_context(|| format!("Invalid database URL: {url}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(DATABASE_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {url}"))?;

        let database = Self { pool };
        database.migrate().await?;
        info!(database = %url, "Database ready");
        Ok(database)
    }

    /// Connect using a connection string such as `sqlite::memory:`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn connect(url: &str) -> Result<Self> {
        Self::new(&DatabaseUrl::parse_url(url)).await
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Users table
    #[must_use]
    pub fn users(&self) -> UsersManager {
        UsersManager::new(self.pool.clone())
    }

    /// Saved recipes table
    #[must_use]
    pub fn saved_recipes(&self) -> SavedRecipesManager {
        SavedRecipesManager::new(self.pool.clone())
    }

    /// Reviews table
    #[must_use]
    pub fn reviews(&self) -> ReviewsManager {
        ReviewsManager::new(self.pool.clone())
    }

    /// Round-trip a trivial query
    ///
    /// # Errors
    ///
    /// Returns a database error if the pool cannot serve a query
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database health check failed: {e}")))?;
        Ok(())
    }

    /// Create all tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_saved_recipes().await?;
        self.migrate_reviews().await?;
        self.migrate_system_secrets().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create users table")?;
        Ok(())
    }

    async fn migrate_saved_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_recipes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                recipe_id INTEGER NOT NULL,
                recipe_data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create saved_recipes table")?;
        Ok(())
    }

    async fn migrate_reviews(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS reviews (
                id TEXT PRIMARY KEY,
                recipe_id INTEGER NOT NULL,
                user_id TEXT REFERENCES users(id) ON DELETE SET NULL,
                author TEXT NOT NULL,
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                comment TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create reviews table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_recipe ON reviews(recipe_id)")
            .execute(&self.pool)
            .await
            .context("Failed to create reviews index")?;
        Ok(())
    }

    async fn migrate_system_secrets(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS system_secrets (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create system_secrets table")?;
        Ok(())
    }
}

/// Fixed-width RFC 3339 timestamp (microseconds, `Z`) that sorts as text
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid timestamp {value}: {e}")))
}

pub(crate) fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))
}

/// Provider recipe ids are stored as `SQLite` INTEGER
pub(crate) fn recipe_id_param(recipe_id: u64) -> AppResult<i64> {
    i64::try_from(recipe_id)
        .map_err(|_| AppError::invalid_input(format!("recipe_id {recipe_id} is out of range")))
}

pub(crate) fn recipe_id_from_row(value: i64) -> AppResult<u64> {
    u64::try_from(value).map_err(|_| AppError::internal(format!("Invalid stored recipe_id {value}")))
}
