// ABOUTME: Spoonacular recipe API client for random, search, detail and instruction lookups
// ABOUTME: Maps provider failures to ProviderError and caches per-recipe responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Spoonacular Recipe API Client
//!
//! # Features
//! - Random recipes and complex search with offset pagination
//! - Recipe details with nutrition, and analyzed instructions
//! - Per-recipe caching of details and instructions (random and search are never cached)
//! - Quota rejections (HTTP 402/429) surfaced as [`ProviderError::QuotaExceeded`]
//!
//! # API Reference
//! Spoonacular API: <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use recipebook_server::external::{RecipeProvider, SpoonacularClient, SpoonacularConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpoonacularConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularConfig::default()
//! };
//!
//! let client = SpoonacularClient::new(config);
//! let recipes = client.random_recipes(6).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::debug;

use super::provider::{ProviderResult, RecipeProvider, SearchRequest};
use crate::constants::{env_config, provider};
use crate::errors::ProviderError;
use crate::logging::AppLogger;
use crate::models::{AnalyzedInstruction, RandomRecipes, RecipeDetail, RecipeSummary, SearchResults};

const SERVICE: &str = provider::SPOONACULAR_SERVICE;

/// Spoonacular client configuration
#[derive(Clone)]
pub struct SpoonacularConfig {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL of the recipes API
    pub base_url: String,
    /// Cache TTL in seconds for details and instructions (0 disables caching)
    pub cache_ttl_secs: u64,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: provider::SPOONACULAR_BASE_URL.to_owned(),
            cache_ttl_secs: provider::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl fmt::Debug for SpoonacularConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoonacularConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("base_url", &self.base_url)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}

impl SpoonacularConfig {
    /// Read `SPOONACULAR_API_KEY`, `SPOONACULAR_BASE_URL` and `RECIPE_CACHE_TTL_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env_config::spoonacular_api_key().unwrap_or_default(),
            base_url: env_config::spoonacular_base_url(),
            cache_ttl_secs: env_config::recipe_cache_ttl_secs(),
        }
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

type RecipeCache<T> = Arc<RwLock<HashMap<u64, CacheEntry<T>>>>;

/// Spoonacular API client
pub struct SpoonacularClient {
    config: SpoonacularConfig,
    http_client: reqwest::Client,
    details_cache: RecipeCache<RecipeDetail>,
    instructions_cache: RecipeCache<Vec<AnalyzedInstruction>>,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client
    #[must_use]
    pub fn new(config: SpoonacularConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            details_cache: Arc::new(RwLock::new(HashMap::new())),
            instructions_cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all caches
    pub async fn clear_caches(&self) {
        self.details_cache.write().await.clear();
        self.instructions_cache.write().await.clear();
    }

    /// Cached entry counts as (details, instructions)
    pub async fn cache_stats(&self) -> (usize, usize) {
        let details = self.details_cache.read().await.len();
        let instructions = self.instructions_cache.read().await.len();
        (details, instructions)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// GET a provider endpoint and decode its JSON body
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ProviderResult<T> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey {
                provider: SERVICE.to_owned(),
            });
        }

        let started = Instant::now();
        let result = self.send(path, query, resource).await;
        AppLogger::log_provider_call(
            SERVICE,
            operation,
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            false,
        );
        result
    }

    async fn send<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ProviderResult<T> {
        let response = self
            .http_client
            .get(self.endpoint(path))
            .query(&[("apiKey", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(SERVICE, &e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound {
                provider: SERVICE.to_owned(),
                resource: resource.to_owned(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(SERVICE, status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse {
                provider: SERVICE.to_owned(),
                message: e.to_string(),
            })
    }

    fn cache_expiry(&self) -> Option<Instant> {
        (self.config.cache_ttl_secs > 0)
            .then(|| Instant::now() + Duration::from_secs(self.config.cache_ttl_secs))
    }
}

async fn cached<T: Clone>(cache: &RecipeCache<T>, id: u64) -> Option<T> {
    let now = Instant::now();
    {
        let entries = cache.read().await;
        match entries.get(&id) {
            Some(entry) if now < entry.expires_at => return Some(entry.data.clone()),
            Some(_) => {}
            None => return None,
        }
    }
    let mut entries = cache.write().await;
    if entries.get(&id).is_some_and(|entry| entry.expires_at <= now) {
        entries.remove(&id);
    }
    None
}

async fn store<T>(cache: &RecipeCache<T>, id: u64, data: T, expires_at: Option<Instant>) {
    if let Some(expires_at) = expires_at {
        let now = Instant::now();
        let mut entries = cache.write().await;
        entries.retain(|_, entry| now < entry.expires_at);
        entries.insert(id, CacheEntry { data, expires_at });
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn random_recipes(&self, count: u32) -> ProviderResult<Vec<RecipeSummary>> {
        let response: RandomRecipes = self
            .get_json("random", "random", &[("number", count.to_string())], "Random recipes")
            .await?;
        Ok(response.recipes)
    }

    async fn recipe_by_id(&self, id: u64) -> ProviderResult<RecipeDetail> {
        if let Some(detail) = cached(&self.details_cache, id).await {
            debug!(recipe.id = id, "Recipe details served from cache");
            AppLogger::log_provider_call(SERVICE, "information", true, 0, true);
            return Ok(detail);
        }

        let detail: RecipeDetail = self
            .get_json(
                "information",
                &format!("{id}/information"),
                &[("includeNutrition", "true".to_owned())],
                &format!("Recipe {id}"),
            )
            .await?;

        store(&self.details_cache, id, detail.clone(), self.cache_expiry()).await;
        Ok(detail)
    }

    async fn recipe_instructions(&self, id: u64) -> ProviderResult<Vec<AnalyzedInstruction>> {
        if let Some(instructions) = cached(&self.instructions_cache, id).await {
            AppLogger::log_provider_call(SERVICE, "analyzedInstructions", true, 0, true);
            return Ok(instructions);
        }

        let instructions: Vec<AnalyzedInstruction> = self
            .get_json(
                "analyzedInstructions",
                &format!("{id}/analyzedInstructions"),
                &[],
                &format!("Instructions for recipe {id}"),
            )
            .await?;

        store(
            &self.instructions_cache,
            id,
            instructions.clone(),
            self.cache_expiry(),
        )
        .await;
        Ok(instructions)
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<SearchResults> {
        let query: Vec<(&str, String)> = request.query_params().into_iter().collect();
        self.get_json("complexSearch", "complexSearch", &query, "Search results")
            .await
    }
}
