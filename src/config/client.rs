// ABOUTME: Terminal client configuration for the backend URL and the recipe provider
// ABOUTME: Validates the backend URL up front so commands fail before any request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::constants::env_config;
use crate::external::SpoonacularConfig;

/// Settings the terminal client needs
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL
    pub api_base_url: Url,
    /// Recipe provider settings
    pub spoonacular: SpoonacularConfig,
}

impl ClientConfig {
    /// Read `RECIPEBOOK_API_URL` and the Spoonacular variables
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL does not parse as http(s)
    pub fn from_env() -> Result<Self> {
        Self::new(&env_config::api_base_url(), SpoonacularConfig::from_env())
    }

    /// Build a configuration from an explicit backend URL
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base_url` is not an absolute http(s) URL
    pub fn new(api_base_url: &str, spoonacular: SpoonacularConfig) -> Result<Self> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            spoonacular,
        })
    }

    /// Whether a provider API key is configured
    #[must_use]
    pub fn has_provider_key(&self) -> bool {
        !self.spoonacular.api_key.is_empty()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid backend URL: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Unsupported backend URL scheme: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_urls() {
        let config = ClientConfig::new("http://127.0.0.1:5000", SpoonacularConfig::default()).unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("127.0.0.1"));
        assert!(!config.has_provider_key());
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(ClientConfig::new("not a url", SpoonacularConfig::default()).is_err());
        assert!(ClientConfig::new("ftp://example.com", SpoonacularConfig::default()).is_err());
    }
}
