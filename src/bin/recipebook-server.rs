// ABOUTME: RecipeBook backend binary serving accounts, saved recipes and reviews
// ABOUTME: Loads configuration from the environment, opens SQLite and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # RecipeBook Server Binary
//!
//! Starts the REST API. Configuration comes from the environment; the flags
//! below override individual values.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipebook_server::{
    config::{environment::DatabaseUrl, ServerConfig},
    logging,
    resources::ServerResources,
    routes::build_router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipebook-server")]
#[command(about = "RecipeBook - accounts, saved recipes and reviews backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (`sqlite:path` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting RecipeBook server");
    info!("{}", config.summary());

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::from_config(config).await?);
    info!("Database and authentication initialized");

    display_available_endpoints(&bind_address);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!("Listening on http://{bind_address}");

    let router = build_router(resources);
    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET  http://{address}/health");
    info!("   Readiness:         GET  http://{address}/ready");
    info!("Accounts:");
    info!("   Register:          POST http://{address}/api/auth/register");
    info!("   Login:             POST http://{address}/api/auth/login");
    info!("   Current User:      GET  http://{address}/api/auth/me");
    info!("Saved Recipes:");
    info!("   Save:              POST http://{address}/api/recipes/save");
    info!("   Unsave:            DELETE http://{address}/api/recipes/save/{{recipe_id}}");
    info!("   List:              GET  http://{address}/api/recipes/saved");
    info!("Reviews:");
    info!("   Submit:            POST http://{address}/api/reviews");
    info!("   List:              GET  http://{address}/api/reviews/{{recipe_id}}?limit&offset");
    info!("=== End of Endpoint List ===");
}
