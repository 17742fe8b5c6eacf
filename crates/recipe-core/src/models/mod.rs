// ABOUTME: Core data models for the recipe session engine
// ABOUTME: Re-exports recipe, nutrition, video and favorite data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Provider-agnostic representations of catalog data. Wire formats are
//! decoded by the catalog client and converted into these types; nothing here
//! knows about the remote JSON field names.
//!
//! - `RecipeSummary`: one row of a search or listing result
//! - `RecipeDetail`: the fully described recipe used by cooking sessions
//! - `Nutrition`: nutrient table attached to a detail
//! - `VideoRef`: an associated how-to video
//! - `FavoriteEntry`: a locally bookmarked recipe

mod favorite;
mod nutrition;
mod recipe;
mod video;

pub use favorite::FavoriteEntry;
pub use nutrition::{Nutrient, Nutrition};
pub use recipe::{Difficulty, Ingredient, InstructionGroup, RecipeDetail, RecipeSummary, Step};
pub use video::VideoRef;
