// ABOUTME: Client-side service layer for browsing and viewing recipes
// ABOUTME: Wraps the recipe provider with session state and view assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Recipe services
//!
//! Provider-facing logic shared by the terminal client and tests. Nothing here
//! talks to the backend; saved recipes and reviews go through
//! [`crate::client::BackendClient`].

/// Recipe query coordinator: random discovery, paginated search, stale-response handling
pub mod browse;

/// Recipe detail view: shopping list, steps and key nutrients
pub mod recipe_detail;

pub use browse::{BrowseMode, BrowseSnapshot, LoadOutcome, RecipeBrowser, SearchState};
pub use recipe_detail::{RecipeDetailView, KEY_NUTRIENTS};
