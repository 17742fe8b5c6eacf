// ABOUTME: Recipe retrieval: detail resolution with caching and listing queries
// ABOUTME: Both sit on top of the RecipeCatalog trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Trending, cuisine and name listings
pub mod discovery;
/// Detail resolution with single-slot cache
pub mod orchestrator;

pub use discovery::RecipeBrowser;
pub use orchestrator::{RecipeOrchestrator, ResolvedRecipe};
