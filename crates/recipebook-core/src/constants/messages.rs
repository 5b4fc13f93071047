// ABOUTME: User-facing error message constants
// ABOUTME: Shared by the backend routes, provider client and terminal client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

/// Shown when the recipe provider rejects a call for quota reasons
pub const PROVIDER_QUOTA_EXCEEDED: &str =
    "Failed to fetch recipes, API limit reached. Try again tomorrow!";

/// Generic provider failure shown to browsing users
pub const PROVIDER_UNAVAILABLE: &str = "Failed to fetch recipes. Please try again.";

/// Saving a recipe that the user already saved
pub const RECIPE_ALREADY_SAVED: &str = "Recipe already saved";

/// Removing a recipe the user never saved
pub const SAVED_RECIPE_NOT_FOUND: &str = "Saved recipe";

/// Registration with an email that already has an account
pub const EMAIL_ALREADY_REGISTERED: &str = "An account with this email already exists";

/// Login failure; identical for unknown email and wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
