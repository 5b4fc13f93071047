// ABOUTME: Saved recipe record and save request models
// ABOUTME: A record pairs a user with a provider recipe id and an opaque snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Recipe saved by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Record id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Provider recipe id
    pub recipe_id: u64,
    /// Snapshot of the recipe at save time
    pub recipe_data: serde_json::Value,
    /// Save time
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecipeRequest {
    /// Provider recipe id
    pub recipe_id: u64,
    /// Snapshot to store with the record
    pub recipe_data: serde_json::Value,
}

impl SaveRecipeRequest {
    /// Check the request before it reaches storage
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero recipe id or a missing snapshot.
    pub fn validate(&self) -> AppResult<()> {
        if self.recipe_id == 0 {
            return Err(AppError::invalid_input("recipe_id must be a positive integer"));
        }
        if self.recipe_data.is_null() {
            return Err(AppError::missing_field("recipe_data"));
        }
        Ok(())
    }
}
