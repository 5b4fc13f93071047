// ABOUTME: External recipe provider clients and the provider contract
// ABOUTME: Spoonacular HTTP client plus an in-memory mock behind the RecipeProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! External API Clients
//!
//! This module contains the recipe provider contract and its implementations.

/// In-memory provider for tests and offline use
pub mod mock;
/// Provider trait and search request types
pub mod provider;
/// Spoonacular recipes API client
pub mod spoonacular;

// Re-export commonly used types
pub use mock::MockRecipeProvider;
pub use provider::{ProviderResult, RecipeProvider, SearchRequest};
pub use spoonacular::{SpoonacularClient, SpoonacularConfig};
