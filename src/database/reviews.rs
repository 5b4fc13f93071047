// ABOUTME: Recipe review database operations
// ABOUTME: Stores validated reviews and pages them with signed-in authors ahead of anonymous ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{
    format_timestamp, parse_timestamp, parse_uuid, recipe_id_from_row, recipe_id_param,
};
use crate::errors::{AppError, AppResult};
use crate::models::{NewReview, Review};

/// One page of reviews
#[derive(Debug, Clone)]
pub struct ReviewPage {
    /// Reviews in display order
    pub reviews: Vec<Review>,
    /// Whether rows exist past this page
    pub has_more: bool,
}

/// Reviews table manager
#[derive(Clone)]
pub struct ReviewsManager {
    pool: SqlitePool,
}

impl ReviewsManager {
    /// Create a manager over `pool`
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a validated review
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create(&self, review: NewReview) -> AppResult<Review> {
        let stored = Review {
            id: Uuid::new_v4(),
            recipe_id: review.recipe_id,
            user_id: review.user_id,
            author: review.author,
            rating: review.rating,
            comment: review.comment,
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO reviews (id, recipe_id, user_id, author, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(stored.id.to_string())
        .bind(recipe_id_param(stored.recipe_id)?)
        .bind(stored.user_id.map(|id| id.to_string()))
        .bind(&stored.author)
        .bind(i64::from(stored.rating))
        .bind(&stored.comment)
        .bind(format_timestamp(stored.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create review: {e}")))?;

        Ok(stored)
    }

    /// Reviews for `recipe_id`, signed-in authors first, each group newest first
    ///
    /// One ordering spans both groups, so consecutive offsets never skip or
    /// repeat a review.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list(&self, recipe_id: u64, limit: u32, offset: u32) -> AppResult<ReviewPage> {
        let rows = sqlx::query(
            r"
            SELECT id, recipe_id, user_id, author, rating, comment, created_at
            FROM reviews
            WHERE recipe_id = $1
            ORDER BY (user_id IS NULL), created_at DESC, rowid DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(recipe_id_param(recipe_id)?)
        .bind(i64::from(limit) + 1)
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list reviews: {e}")))?;

        let mut reviews = rows
            .iter()
            .map(row_to_review)
            .collect::<AppResult<Vec<_>>>()?;
        let has_more = reviews.len() > limit as usize;
        reviews.truncate(limit as usize);

        Ok(ReviewPage { reviews, has_more })
    }
}

fn row_to_review(row: &SqliteRow) -> AppResult<Review> {
    let id: String = row.get("id");
    let user_id: Option<String> = row.get("user_id");
    let rating: i64 = row.get("rating");
    let created_at: String = row.get("created_at");
    Ok(Review {
        id: parse_uuid(&id)?,
        recipe_id: recipe_id_from_row(row.get("recipe_id"))?,
        user_id: user_id.as_deref().map(parse_uuid).transpose()?,
        author: row.get("author"),
        rating: u8::try_from(rating)
            .map_err(|_| AppError::internal(format!("Invalid stored rating {rating}")))?,
        comment: row.get("comment"),
        created_at: parse_timestamp(&created_at)?,
    })
}
