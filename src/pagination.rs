// ABOUTME: Re-exports page math and the numbered page window from recipebook-core
// ABOUTME: Ensures PageLink is the same type for the coordinator and the terminal client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

pub use recipebook_core::pagination::*;
