// ABOUTME: Favorite recipe bookmark model
// ABOUTME: Created from a recipe detail, stamped with the time it was added
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeDetail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locally bookmarked recipe. At most one entry exists per `recipe_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Catalog recipe id
    pub recipe_id: u64,
    /// Recipe title at the time it was favorited
    pub title: String,
    /// Image URL at the time it was favorited
    pub image_url: String,
    /// Preparation time in minutes
    pub ready_minutes: u32,
    /// When the bookmark was created
    pub date_added: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Snapshot a recipe as a favorite added at `date_added`
    #[must_use]
    pub fn from_detail(detail: &RecipeDetail, date_added: DateTime<Utc>) -> Self {
        Self {
            recipe_id: detail.id,
            title: detail.title.clone(),
            image_url: detail.image_url.clone(),
            ready_minutes: detail.ready_minutes,
            date_added,
        }
    }
}
