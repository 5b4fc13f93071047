// ABOUTME: Recipe detail view assembling details, shopping list and steps for one recipe
// ABOUTME: Fetches details and instructions concurrently and derives display data from them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use serde::Serialize;

use crate::errors::AppResult;
use crate::external::RecipeProvider;
use crate::ingredients::aggregate_ingredients;
use crate::models::{
    first_block_steps, AnalyzedInstruction, Ingredient, InstructionStep, RecipeDetail,
};

/// Nutrients shown on the detail view, in display order
pub const KEY_NUTRIENTS: [&str; 4] = ["Calories", "Protein", "Fat", "Carbohydrates"];

/// Everything the detail view renders for one recipe
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetailView {
    /// Provider details
    pub detail: RecipeDetail,
    /// Ingredients merged by name and unit
    pub shopping_list: Vec<Ingredient>,
    /// Steps of the first instruction block
    pub steps: Vec<InstructionStep>,
}

impl RecipeDetailView {
    /// Fetch details and instructions for `id` and build the view
    ///
    /// # Errors
    ///
    /// Returns the provider failure, converted for display, if either call fails
    pub async fn load(provider: &dyn RecipeProvider, id: u64) -> AppResult<Self> {
        let (detail, instructions) = tokio::try_join!(
            provider.recipe_by_id(id),
            provider.recipe_instructions(id)
        )?;
        Ok(Self::from_parts(detail, &instructions))
    }

    /// Build the view from already fetched parts
    #[must_use]
    pub fn from_parts(detail: RecipeDetail, instructions: &[AnalyzedInstruction]) -> Self {
        let ingredients = detail.ingredients();
        Self {
            shopping_list: aggregate_ingredients(&ingredients),
            steps: first_block_steps(instructions),
            detail,
        }
    }

    /// Key nutrients as (name, display value) pairs; missing ones show "N/A"
    #[must_use]
    pub fn key_nutrients(&self) -> Vec<(&'static str, String)> {
        KEY_NUTRIENTS
            .iter()
            .map(|&name| (name, self.detail.nutrient_display(name)))
            .collect()
    }
}
