// ABOUTME: Configuration management for the backend service and the terminal client
// ABOUTME: Both are read from environment variables with defaults for local development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Configuration module for RecipeBook
//!
//! - **Environment**: backend bind address, database, JWT and CORS settings
//! - **Client**: backend URL and recipe provider settings for the terminal client

/// Backend configuration from environment variables
pub mod environment;

/// Terminal client configuration
pub mod client;

pub use client::ClientConfig;
pub use environment::{Environment, ServerConfig};
