// ABOUTME: Saved recipe commands for recipebook-cli
// ABOUTME: Snapshots a recipe from the provider and stores it with the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use anyhow::Result;
use recipebook_server::models::SaveRecipeRequest;

use super::CliContext;
use crate::helpers::display::display_saved;

/// Save a recipe; the snapshot is its provider summary
pub async fn save(context: &CliContext, recipe_id: u64) -> Result<()> {
    let backend = context.signed_in()?;
    let detail = context.provider.recipe_by_id(recipe_id).await?;
    let request = SaveRecipeRequest {
        recipe_id,
        recipe_data: serde_json::to_value(detail.to_summary())?,
    };

    let saved = backend.save_recipe(&request).await?;
    println!("Saved {} ({}).", detail.title, saved.recipe_id);
    Ok(())
}

pub async fn unsave(context: &CliContext, recipe_id: u64) -> Result<()> {
    context.signed_in()?.unsave_recipe(recipe_id).await?;
    println!("Removed {recipe_id} from saved recipes.");
    Ok(())
}

pub async fn list(context: &CliContext) -> Result<()> {
    let response = context.signed_in()?.saved_recipes().await?;
    println!("{} saved recipe(s)", response.count);
    display_saved(&response.saved_recipes);
    Ok(())
}
