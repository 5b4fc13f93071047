// ABOUTME: Saved recipe database operations scoped to one user
// ABOUTME: Enforces one record per user and recipe id and lists newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{
    format_timestamp, parse_timestamp, parse_uuid, recipe_id_from_row, recipe_id_param,
};
use crate::constants::messages::{RECIPE_ALREADY_SAVED, SAVED_RECIPE_NOT_FOUND};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{SaveRecipeRequest, SavedRecipe};

/// Saved recipes table manager
#[derive(Clone)]
pub struct SavedRecipesManager {
    pool: SqlitePool,
}

impl SavedRecipesManager {
    /// Create a manager over `pool`
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Save a recipe snapshot for `user_id`
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the user already saved this recipe id, or
    /// a database error if the insert fails
    pub async fn save(&self, user_id: Uuid, request: &SaveRecipeRequest) -> AppResult<SavedRecipe> {
        let record = SavedRecipe {
            id: Uuid::new_v4(),
            user_id,
            recipe_id: request.recipe_id,
            recipe_data: request.recipe_data.clone(),
            created_at: Utc::now(),
        };
        let recipe_data = serde_json::to_string(&record.recipe_data)?;

        sqlx::query(
            r"
            INSERT INTO saved_recipes (id, user_id, recipe_id, recipe_data, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.id.to_string())
        .bind(user_id.to_string())
        .bind(recipe_id_param(record.recipe_id)?)
        .bind(recipe_data)
        .bind(format_timestamp(record.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| match AppError::from(e) {
            conflict if conflict.code == ErrorCode::ResourceAlreadyExists => {
                AppError::conflict(RECIPE_ALREADY_SAVED)
            }
            other => other,
        })?;

        Ok(record)
    }

    /// Delete the user's record for `recipe_id`
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the user has no such record
    pub async fn delete(&self, user_id: Uuid, recipe_id: u64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM saved_recipes WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id.to_string())
            .bind(recipe_id_param(recipe_id)?)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete saved recipe: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(SAVED_RECIPE_NOT_FOUND).with_resource_id(recipe_id.to_string()));
        }
        Ok(())
    }

    /// All of the user's saved recipes, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored snapshot is not JSON
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<SavedRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recipe_id, recipe_data, created_at
            FROM saved_recipes
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list saved recipes: {e}")))?;

        rows.iter().map(row_to_saved_recipe).collect()
    }
}

fn row_to_saved_recipe(row: &SqliteRow) -> AppResult<SavedRecipe> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let recipe_data: String = row.get("recipe_data");
    let created_at: String = row.get("created_at");
    Ok(SavedRecipe {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        recipe_id: recipe_id_from_row(row.get("recipe_id"))?,
        recipe_data: serde_json::from_str(&recipe_data)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
