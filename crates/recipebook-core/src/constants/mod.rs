// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for browsing, reviews, auth and the recipe provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// User-facing error messages
pub mod messages;

/// Network ports
pub mod ports {
    /// Default HTTP port for the backend service
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
}

/// API routes
pub mod routes {
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Auth routes prefix
    pub const AUTH: &str = "/api/auth";
    /// Saved recipe routes prefix
    pub const RECIPES: &str = "/api/recipes";
    /// Review routes prefix
    pub const REVIEWS: &str = "/api/reviews";
}

/// Browsing defaults for the recipe query coordinator
pub mod browse {
    /// Recipes requested by the first random discovery load
    pub const DEFAULT_RANDOM_COUNT: u32 = 6;
    /// Recipes appended by each "load more" in random discovery mode
    pub const DEFAULT_LOAD_MORE_RANDOM_COUNT: u32 = 12;
    /// Search results per page
    pub const DEFAULT_PAGE_SIZE: u32 = 12;
    /// Maximum numbered entries in the page window
    pub const MAX_VISIBLE_PAGES: u32 = 5;
}

/// Review limits
pub mod reviews {
    /// Lowest accepted rating
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating
    pub const MAX_RATING: u8 = 5;
    /// Maximum comment length in characters
    pub const MAX_COMMENT_CHARS: usize = 500;
    /// Maximum author name length in characters
    pub const MAX_AUTHOR_CHARS: usize = 100;
    /// Default page size for review listings
    pub const DEFAULT_LIMIT: u32 = 5;
    /// Largest page size a client may request
    pub const MAX_LIMIT: u32 = 50;
    /// Author recorded when none is supplied
    pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
}

/// Account limits
pub mod auth {
    /// Minimum password length
    pub const MIN_PASSWORD_LENGTH: usize = 6;
    /// Maximum display name length
    pub const MAX_NAME_LENGTH: usize = 100;
    /// Default bearer token lifetime (30 days)
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 720;
    /// Longest configurable token lifetime (one year)
    pub const MAX_JWT_EXPIRY_HOURS: i64 = 8760;
    /// JWT audience claim
    pub const JWT_AUDIENCE: &str = "recipebook";
}

/// Recipe provider defaults
pub mod provider {
    /// Spoonacular recipes API base URL
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com/recipes";
    /// Service name used in logs and errors
    pub const SPOONACULAR_SERVICE: &str = "Spoonacular";
    /// Default cache lifetime for detail and instruction responses
    pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
    /// Nutrient display fallback when a value is unavailable
    pub const NUTRIENT_UNAVAILABLE: &str = "N/A";
}
