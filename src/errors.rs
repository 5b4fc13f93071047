// ABOUTME: Re-exports the unified error types from recipebook-core
// ABOUTME: Keeps AppError and ProviderError the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

pub use recipebook_core::errors::*;
