// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook
// ABOUTME: Re-exports helper modules for recipebook-cli
// ABOUTME: Provides the credential store and display formatting utilities

pub mod credentials;
pub mod display;
