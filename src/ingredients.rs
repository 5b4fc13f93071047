// ABOUTME: Re-exports shopping-list aggregation from recipebook-core
// ABOUTME: Used by the recipe detail view and the aggregation benchmark
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

pub use recipebook_core::ingredients::*;
