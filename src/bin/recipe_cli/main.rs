// ABOUTME: Recipe CLI - browse recipes, manage favorites and run guided cooking sessions
// ABOUTME: Loads environment configuration and dispatches to command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Trending recipes
//! recipe-cli trending
//!
//! # Search by name or cuisine
//! recipe-cli search --query lasagna
//! recipe-cli search --cuisine Thai
//! recipe-cli search --query curry --cuisine Thai
//!
//! # Recipe detail with video and favorite flag
//! recipe-cli show 715538
//!
//! # Favorites
//! recipe-cli favorites add 715538
//! recipe-cli favorites list
//!
//! # Guided cooking session
//! recipe-cli cook 715538
//! ```

mod commands;
mod helpers;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use recipe_session::config::AppConfig;
use recipe_session::external::{RecipeCatalog, SpoonacularClient};
use recipe_session::favorites::FavoritesGateway;
use recipe_session::http_client::initialize_shared_client;
use recipe_session::logging::LoggingConfig;
use std::env;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe browser and guided cooking CLI",
    long_about = "Browse a remote recipe catalog, keep favorites, and cook step by step with timers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List trending recipes
    Trending,

    /// Search recipes by name or cuisine
    Search {
        /// Recipe name to search for
        #[arg(long)]
        query: Option<String>,

        /// Cuisine to list, e.g. "Italian"
        #[arg(long)]
        cuisine: Option<String>,
    },

    /// Show a recipe with its video and favorite status
    Show {
        /// Recipe id
        id: u64,
    },

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Cook a recipe step by step
    Cook {
        /// Recipe id
        id: u64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites, most recent first
    List,
    /// Favorite a recipe
    Add {
        /// Recipe id
        id: u64,
    },
    /// Unfavorite a recipe
    Remove {
        /// Recipe id
        id: u64,
    },
    /// Remove every favorite
    Clear,
}

/// Shared dependencies for commands
pub struct Context {
    /// Loaded configuration
    pub config: AppConfig,
    /// Favorites gateway
    pub favorites: Arc<FavoritesGateway>,
}

impl Context {
    /// Catalog client; fails when no API key is configured
    pub fn catalog(&self) -> Result<Arc<dyn RecipeCatalog>> {
        Ok(Arc::new(SpoonacularClient::new(&self.config.catalog)?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else if env::var("RUST_LOG").is_err() {
        logging.with_level("warn")
    } else {
        logging
    };
    logging.init()?;

    let config = AppConfig::from_env()?;
    initialize_shared_client(
        config.catalog.timeout_secs,
        config.catalog.connect_timeout_secs,
    );
    debug!(?config, "recipe-cli starting");

    let favorites = Arc::new(FavoritesGateway::open(&config.favorites).await?);
    let context = Context { config, favorites };

    match cli.command {
        Command::Trending => commands::recipes::trending(&context).await?,
        Command::Search { query, cuisine } => match (query, cuisine) {
            (Some(query), Some(cuisine)) => {
                commands::recipes::search_in_cuisine(&context, &query, &cuisine).await?;
            }
            (Some(query), None) => commands::recipes::search(&context, &query).await?,
            (None, Some(cuisine)) => commands::recipes::by_cuisine(&context, &cuisine).await?,
            (None, None) => bail!("search needs --query or --cuisine"),
        },
        Command::Show { id } => commands::recipes::show(&context, id).await?,
        Command::Favorites { action } => match action {
            FavoritesCommand::List => commands::favorites::list(&context).await?,
            FavoritesCommand::Add { id } => commands::favorites::add(&context, id).await?,
            FavoritesCommand::Remove { id } => commands::favorites::remove(&context, id).await?,
            FavoritesCommand::Clear => commands::favorites::clear(&context).await?,
        },
        Command::Cook { id } => commands::cook::run(&context, id).await?,
    }

    Ok(())
}
