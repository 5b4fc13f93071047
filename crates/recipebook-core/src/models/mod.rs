// ABOUTME: Core data models and types for the RecipeBook platform
// ABOUTME: Re-exports recipe, ingredient, saved recipe, review and user structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Provider shaped**: recipe types deserialize straight from the provider's JSON
//! - **Explicit absence**: nested provider fields that may be missing are `Option`
//!   with accessor methods that apply the display fallback
//! - **Immutable records**: saved recipes and reviews are created, never edited

// Domain modules
mod recipe;
mod review;
mod saved_recipe;
mod user;

// Recipe domain
pub use recipe::{
    first_block_steps, AnalyzedInstruction, ExtendedIngredient, Ingredient, InstructionStep,
    Measure, Measures, Nutrient, Nutrition, RandomRecipes, RecipeDetail, RecipeSummary,
    SearchFilters, SearchResults,
};

// Reviews
pub use review::{NewReview, Review, ReviewAuthor, ReviewSubmission};

// Saved recipes
pub use saved_recipe::{SaveRecipeRequest, SavedRecipe};

// Users
pub use user::{User, UserInfo};
