// ABOUTME: Recipe review models and submission validation
// ABOUTME: Resolves the review author from the caller identity with an Anonymous fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::reviews::{
    ANONYMOUS_AUTHOR, MAX_AUTHOR_CHARS, MAX_COMMENT_CHARS, MAX_RATING, MIN_RATING,
};
use crate::errors::{AppError, AppResult};

/// Stored review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review id
    pub id: Uuid,
    /// Provider recipe id
    pub recipe_id: u64,
    /// Owning user when submitted while signed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Display name of the author
    pub author: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Review text
    pub comment: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

/// Request body for submitting a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Provider recipe id
    pub recipe_id: u64,
    /// Rating; validated to 1..=5
    pub rating: i64,
    /// Review text
    pub comment: String,
    /// Name to show for anonymous submissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Authenticated identity submitting a review
#[derive(Debug, Clone)]
pub struct ReviewAuthor {
    /// User id
    pub user_id: Uuid,
    /// User display name
    pub name: String,
}

/// Validated review ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Provider recipe id
    pub recipe_id: u64,
    /// Owning user
    pub user_id: Option<Uuid>,
    /// Resolved author name
    pub author: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Trimmed review text
    pub comment: String,
}

impl ReviewSubmission {
    /// Validate the submission and resolve its author
    ///
    /// The signed-in user's name wins over a supplied `user_name`; with neither
    /// the review is attributed to "Anonymous".
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero recipe id, a rating outside 1..=5,
    /// an empty comment, or a comment or name over its length limit.
    pub fn validate(self, author: Option<ReviewAuthor>) -> AppResult<NewReview> {
        if self.recipe_id == 0 {
            return Err(AppError::invalid_input("recipe_id must be a positive integer"));
        }

        let rating = u8::try_from(self.rating)
            .ok()
            .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "Rating must be between {MIN_RATING} and {MAX_RATING}"
                ))
            })?;

        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(AppError::missing_field("comment"));
        }
        if comment.chars().count() > MAX_COMMENT_CHARS {
            return Err(AppError::out_of_range(format!(
                "Comment cannot exceed {MAX_COMMENT_CHARS} characters"
            )));
        }

        let (user_id, author) = match author {
            Some(author) => (Some(author.user_id), author.name),
            None => (None, Self::anonymous_name(self.user_name.as_deref())?),
        };

        Ok(NewReview {
            recipe_id: self.recipe_id,
            user_id,
            author,
            rating,
            comment: comment.to_owned(),
        })
    }

    fn anonymous_name(supplied: Option<&str>) -> AppResult<String> {
        match supplied.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) if name.chars().count() > MAX_AUTHOR_CHARS => Err(AppError::out_of_range(
                format!("Name cannot exceed {MAX_AUTHOR_CHARS} characters"),
            )),
            Some(name) => Ok(name.to_owned()),
            None => Ok(ANONYMOUS_AUTHOR.to_owned()),
        }
    }
}
