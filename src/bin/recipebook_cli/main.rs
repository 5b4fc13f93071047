// ABOUTME: RecipeBook CLI - terminal client for recipe discovery and the RecipeBook backend
// ABOUTME: Browses and searches recipes, manages the account, saved recipes and reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook
//!
//! Usage:
//! ```bash
//! # Discover recipes
//! recipebook-cli random --count 6
//! recipebook-cli search pasta --filter cuisine=italian --page 2
//! recipebook-cli show 716429
//!
//! # Account
//! recipebook-cli register --name Ada --email ada@example.com --password secret1
//! recipebook-cli whoami
//!
//! # Saved recipes and reviews
//! recipebook-cli save 716429
//! recipebook-cli review add 716429 --rating 5 --comment "Lovely"
//! recipebook-cli review list 716429 --limit 5
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipebook_server::{
    config::ClientConfig,
    constants::browse::DEFAULT_RANDOM_COUNT,
    external::{MockRecipeProvider, RecipeProvider, SpoonacularClient},
    logging::LoggingConfig,
};
use tracing::{debug, warn};

use commands::{account, browse, reviews, saved, CliContext};
use helpers::credentials::CredentialStore;

#[derive(Parser)]
#[command(
    name = "recipebook-cli",
    about = "RecipeBook terminal client",
    long_about = "Discover Spoonacular recipes and manage saved recipes and reviews on a RecipeBook backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use the built-in sample catalogue instead of Spoonacular
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show random recipes
    Random {
        /// Recipes in the first batch
        #[arg(long, default_value_t = DEFAULT_RANDOM_COUNT)]
        count: u32,

        /// Extra batches to append
        #[arg(long, default_value_t = 0)]
        more: u32,
    },

    /// Search recipes
    Search {
        /// Search text
        query: String,

        /// Provider filter as key=value (repeatable)
        #[arg(long = "filter", short = 'f')]
        filters: Vec<String>,

        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show a recipe with nutrition, shopping list and steps
    Show {
        /// Recipe id
        recipe_id: u64,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Save a recipe
    Save {
        recipe_id: u64,
    },

    /// Remove a saved recipe
    Unsave {
        recipe_id: u64,
    },

    /// List saved recipes
    Saved,

    /// Review commands
    Review {
        #[command(subcommand)]
        action: ReviewCommand,
    },
}

#[derive(Subcommand)]
enum ReviewCommand {
    /// Submit a review
    Add {
        recipe_id: u64,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: i64,

        #[arg(long)]
        comment: String,

        /// Name shown when not signed in
        #[arg(long)]
        name: Option<String>,
    },

    /// List reviews for a recipe
    List {
        recipe_id: u64,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = ClientConfig::new(api_url, config.spoonacular)?;
    }
    debug!(api_url = %config.api_base_url, offline = cli.offline, "CLI configuration");

    let provider: Arc<dyn RecipeProvider> = if cli.offline {
        Arc::new(MockRecipeProvider::new())
    } else {
        if !config.has_provider_key() {
            warn!("SPOONACULAR_API_KEY is not set; recipe commands will fail (try --offline)");
        }
        Arc::new(SpoonacularClient::new(config.spoonacular.clone()))
    };

    let context = CliContext {
        config,
        provider,
        store: CredentialStore::default_location()?,
    };

    match cli.command {
        Command::Random { count, more } => browse::random(&context, count, more).await?,
        Command::Search {
            query,
            filters,
            page,
            page_size,
        } => browse::search(&context, &query, &filters, page, page_size).await?,
        Command::Show { recipe_id } => browse::show(&context, recipe_id).await?,
        Command::Register {
            name,
            email,
            password,
        } => account::register(&context, name, email, password).await?,
        Command::Login { email, password } => account::login(&context, email, password).await?,
        Command::Logout => account::logout(&context)?,
        Command::Whoami => account::whoami(&context).await?,
        Command::Save { recipe_id } => saved::save(&context, recipe_id).await?,
        Command::Unsave { recipe_id } => saved::unsave(&context, recipe_id).await?,
        Command::Saved => saved::list(&context).await?,
        Command::Review { action } => match action {
            ReviewCommand::Add {
                recipe_id,
                rating,
                comment,
                name,
            } => reviews::add(&context, recipe_id, rating, comment, name).await?,
            ReviewCommand::List {
                recipe_id,
                limit,
                offset,
            } => reviews::list(&context, recipe_id, limit, offset).await?,
        },
    }

    Ok(())
}
