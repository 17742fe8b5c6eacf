// ABOUTME: Favorites management commands for recipe-cli
// ABOUTME: List, add, remove and clear favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use tracing::info;

use super::recipes::orchestrator;
use crate::helpers::display::display_favorites;
use crate::Context;

/// List favorites
pub async fn list(context: &Context) -> Result<()> {
    let favorites = context.favorites.list().await?;
    display_favorites(&favorites);
    Ok(())
}

/// Favorite a recipe after loading its details
pub async fn add(context: &Context, id: u64) -> Result<()> {
    let resolved = orchestrator(context)?.resolve_recipe(id).await?;
    if resolved.is_favorite {
        println!("\"{}\" is already a favorite", resolved.detail.title);
        return Ok(());
    }

    context.favorites.add(&resolved.detail).await?;
    info!(recipe_id = id, "Favorite added from CLI");
    println!("Added \"{}\" to favorites", resolved.detail.title);
    Ok(())
}

/// Unfavorite a recipe
pub async fn remove(context: &Context, id: u64) -> Result<()> {
    let was_favorite = context.favorites.is_favorite(id).await?;
    context.favorites.remove(id).await?;
    if was_favorite {
        println!("Removed recipe {id} from favorites");
    } else {
        println!("Recipe {id} was not a favorite");
    }
    Ok(())
}

/// Remove every favorite
pub async fn clear(context: &Context) -> Result<()> {
    context.favorites.clear().await?;
    println!("Favorites cleared");
    Ok(())
}
