// ABOUTME: HTTP middleware for request tracing, bearer authentication and CORS
// ABOUTME: Provides request ID propagation, span creation and credential extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

/// Bearer token extraction and validation
pub mod auth;
/// CORS layer from configuration
pub mod cors;
/// Request IDs, request spans and completion logging
pub mod request_id;

// Authentication helpers
pub use auth::{bearer_token, optional_auth, require_auth};

// CORS configuration
pub use cors::setup_cors;

// Request tracing and context management
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
