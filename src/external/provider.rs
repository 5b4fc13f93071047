// ABOUTME: Recipe provider contract shared by the Spoonacular client and the mock
// ABOUTME: Defines search requests and the async trait the query coordinator depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::models::{AnalyzedInstruction, RecipeDetail, RecipeSummary, SearchFilters, SearchResults};

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Query, filters and result window for a provider search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,
    /// Provider filter options; empty values are not sent
    pub filters: SearchFilters,
    /// Results per request
    pub number: u32,
    /// Index of the first result
    pub offset: u32,
}

impl SearchRequest {
    /// Merged query parameters: query, then non-empty filters, then the window
    ///
    /// Each key appears once. `number` and `offset` always come from the
    /// request window, and a filter cannot replace the API key.
    #[must_use]
    pub fn query_params(&self) -> BTreeMap<&str, String> {
        let mut params = BTreeMap::new();
        if !self.query.is_empty() {
            params.insert("query", self.query.clone());
        }
        for (key, value) in &self.filters {
            if !value.is_empty() && key != "apiKey" {
                params.insert(key.as_str(), value.clone());
            }
        }
        params.insert("number", self.number.to_string());
        params.insert("offset", self.offset.to_string());
        params
    }
}

/// Third-party source of recipe data
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Provider name for logs and error messages
    fn name(&self) -> &'static str;

    /// Arbitrary recipes with no query
    async fn random_recipes(&self, count: u32) -> ProviderResult<Vec<RecipeSummary>>;

    /// Full details including ingredients and nutrition
    async fn recipe_by_id(&self, id: u64) -> ProviderResult<RecipeDetail>;

    /// Instruction blocks of a recipe
    async fn recipe_instructions(&self, id: u64) -> ProviderResult<Vec<AnalyzedInstruction>>;

    /// Query-matched recipes for one result window, with the total match count
    async fn search(&self, request: &SearchRequest) -> ProviderResult<SearchResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_overrides_filters() {
        let mut filters = SearchFilters::new();
        filters.insert("offset".into(), "999".into());
        filters.insert("number".into(), "100".into());
        filters.insert("apiKey".into(), "stolen".into());
        filters.insert("cuisine".into(), "thai".into());
        filters.insert("diet".into(), String::new());
        let request = SearchRequest {
            query: "curry".into(),
            filters,
            number: 12,
            offset: 24,
        };

        let params = request.query_params();
        assert_eq!(params.get("offset").map(String::as_str), Some("24"));
        assert_eq!(params.get("number").map(String::as_str), Some("12"));
        assert_eq!(params.get("cuisine").map(String::as_str), Some("thai"));
        assert_eq!(params.get("query").map(String::as_str), Some("curry"));
        assert!(!params.contains_key("apiKey"));
        assert!(!params.contains_key("diet"));
    }
}
