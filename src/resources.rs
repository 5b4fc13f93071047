// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles the database, the token manager and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;

/// Centralized resource container for route handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Bearer token issuer and validator
    pub auth_manager: AuthManager,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already built parts
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        Self {
            database,
            auth_manager,
            config,
        }
    }

    /// Connect the database and set up token signing from `config`
    ///
    /// Uses `JWT_SECRET` when configured, else the secret stored in the
    /// database (generated on first start).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the secret cannot
    /// be loaded
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        let database = Database::new(&config.database.url).await?;

        let secret = match &config.auth.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                info!("Using JWT signing secret stored in the database");
                database.get_or_create_jwt_secret().await?
            }
        };
        let auth_manager = AuthManager::new(secret.as_bytes(), config.auth.jwt_expiry_hours);

        Ok(Self::new(database, auth_manager, Arc::new(config)))
    }
}
