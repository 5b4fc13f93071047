// ABOUTME: Core data models re-exported from recipebook-core
// ABOUTME: Recipe listings and details, reviews, saved recipes and user accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Data Models
//!
//! Recipe shapes mirror the provider's JSON (camelCase on the wire). Reviews,
//! saved recipes and users are the backend's own records.

pub use recipebook_core::models::*;
