// ABOUTME: Recipe browsing commands for recipe-cli
// ABOUTME: Trending, search, cuisine listing and recipe detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use recipe_session::recipes::{RecipeBrowser, RecipeOrchestrator};
use std::sync::Arc;

use crate::helpers::display::{display_recipe, display_summaries};
use crate::Context;

fn browser(context: &Context) -> Result<RecipeBrowser> {
    Ok(RecipeBrowser::new(
        context.catalog()?,
        context.config.catalog.search_page_size,
    ))
}

/// List trending recipes
pub async fn trending(context: &Context) -> Result<()> {
    let recipes = browser(context)?.trending().await?;
    display_summaries("Trending recipes", &recipes);
    Ok(())
}

/// Search recipes by name
pub async fn search(context: &Context, query: &str) -> Result<()> {
    let recipes = browser(context)?.search(query).await?;
    display_summaries(&format!("Results for \"{query}\""), &recipes);
    Ok(())
}

/// Search recipes by name within one cuisine
pub async fn search_in_cuisine(context: &Context, query: &str, cuisine: &str) -> Result<()> {
    let recipes = browser(context)?.search_in_cuisine(query, cuisine).await?;
    display_summaries(&format!("{cuisine} results for \"{query}\""), &recipes);
    Ok(())
}

/// List recipes of one cuisine
pub async fn by_cuisine(context: &Context, cuisine: &str) -> Result<()> {
    let recipes = browser(context)?.by_cuisine(cuisine).await?;
    display_summaries(&format!("{cuisine} recipes"), &recipes);
    Ok(())
}

/// Show one recipe
pub async fn show(context: &Context, id: u64) -> Result<()> {
    let orchestrator = orchestrator(context)?;
    let resolved = orchestrator.resolve_recipe(id).await?;
    display_recipe(&resolved);
    Ok(())
}

/// Orchestrator over the configured catalog and favorites
pub fn orchestrator(context: &Context) -> Result<RecipeOrchestrator> {
    Ok(RecipeOrchestrator::new(
        context.catalog()?,
        Arc::clone(&context.favorites),
    ))
}
