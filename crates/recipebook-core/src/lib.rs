// ABOUTME: Core types and constants for the RecipeBook platform
// ABOUTME: Foundation crate with error handling, recipe models, aggregation and page math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![deny(unsafe_code)]

//! # RecipeBook Core
//!
//! Foundation crate providing shared types and constants for the RecipeBook
//! server, its provider client and its terminal client. This crate is designed
//! to change infrequently and carries no I/O of its own.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Application-wide limits, defaults and user-facing messages
//! - **models**: Recipe provider wire models, saved recipes, reviews and users
//! - **ingredients**: Shopping-list aggregation over a recipe's ingredient list
//! - **pagination**: Page arithmetic and the numbered page window

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (recipes, ingredients, saved recipes, reviews, users)
pub mod models;

/// Ingredient aggregation into (name, unit) buckets
pub mod ingredients;

/// Page arithmetic and page-number window
pub mod pagination;
