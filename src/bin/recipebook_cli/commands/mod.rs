// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook
// ABOUTME: Re-exports command modules for recipebook-cli and the shared command context
// ABOUTME: The context owns the recipe provider, backend URL and credential store

pub mod account;
pub mod browse;
pub mod reviews;
pub mod saved;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use recipebook_server::client::BackendClient;
use recipebook_server::config::ClientConfig;
use recipebook_server::external::RecipeProvider;

use crate::helpers::credentials::CredentialStore;

/// Everything a command needs
pub struct CliContext {
    pub config: ClientConfig,
    pub provider: Arc<dyn RecipeProvider>,
    pub store: CredentialStore,
}

impl CliContext {
    /// Backend client carrying the stored token, if any
    pub fn backend(&self) -> Result<BackendClient> {
        let client = BackendClient::new(&self.config.api_base_url);
        Ok(match self.store.load()? {
            Some(credentials) => client.with_token(credentials.token),
            None => client,
        })
    }

    /// Backend client for commands that need an account
    pub fn signed_in(&self) -> Result<BackendClient> {
        let backend = self.backend()?;
        if backend.token().is_none() {
            return Err(anyhow!("Not signed in; run `recipebook-cli login` first"));
        }
        Ok(backend)
    }
}
