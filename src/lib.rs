// ABOUTME: Main library entry point for the RecipeBook backend and terminal client
// ABOUTME: Provides the REST API, the recipe provider client and the browse coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

#![deny(unsafe_code)]

//! # RecipeBook
//!
//! Recipe discovery on top of the Spoonacular API, with a small backend that
//! keeps accounts, saved recipes and reviews in `SQLite`.
//!
//! ## Architecture
//!
//! - **external**: recipe provider trait, the Spoonacular client and a mock
//! - **services**: browse coordinator and the recipe detail view
//! - **routes**: axum handlers for accounts, saved recipes and reviews
//! - **database**: sqlx managers per table
//! - **client**: typed HTTP client for the backend, used by `recipebook-cli`

/// Bearer token issuing and password hashing
pub mod auth;

/// Typed client for the RecipeBook REST API
pub mod client;

/// Server and client configuration
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` persistence
pub mod database;

/// Error types (re-exported from `recipebook-core`)
pub mod errors;

/// Recipe provider clients
pub mod external;

/// Ingredient aggregation (re-exported from `recipebook-core`)
pub mod ingredients;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models (re-exported from `recipebook-core`)
pub mod models;

/// Page window arithmetic (re-exported from `recipebook-core`)
pub mod pagination;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Browse and detail services
pub mod services;
