// ABOUTME: Review commands for recipebook-cli
// ABOUTME: Submits reviews (signed in when a token is stored) and pages through them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use anyhow::Result;
use recipebook_server::models::ReviewSubmission;

use super::CliContext;
use crate::helpers::display::display_reviews;

pub async fn add(
    context: &CliContext,
    recipe_id: u64,
    rating: i64,
    comment: String,
    name: Option<String>,
) -> Result<()> {
    let submission = ReviewSubmission {
        recipe_id,
        rating,
        comment,
        user_name: name,
    };
    let review = context.backend()?.submit_review(&submission).await?;
    println!(
        "Review by {} recorded for recipe {}.",
        review.author, review.recipe_id
    );
    Ok(())
}

pub async fn list(
    context: &CliContext,
    recipe_id: u64,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<()> {
    let page = context.backend()?.reviews(recipe_id, limit, offset).await?;
    display_reviews(&page.reviews, page.has_more);
    Ok(())
}
