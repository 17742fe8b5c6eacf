// ABOUTME: Recipe listings for browsing: trending, by cuisine, by name and by ids
// ABOUTME: Maps catalog failures to the retryable FetchError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::FetchError;
use crate::external::{RecipeCatalog, SearchFilter, SearchQuery};
use crate::models::{RecipeDetail, RecipeSummary};
use std::sync::Arc;
use tracing::{debug, warn};

/// Recipe listing queries
pub struct RecipeBrowser {
    catalog: Arc<dyn RecipeCatalog>,
    page_size: u32,
}

impl RecipeBrowser {
    /// Browser returning `page_size` results per listing
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, page_size: u32) -> Self {
        Self { catalog, page_size }
    }

    /// Unfiltered listing
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the catalog call fails
    pub async fn trending(&self) -> Result<Vec<RecipeSummary>, FetchError> {
        self.list(SearchFilter::Trending, "trending recipes").await
    }

    /// Recipes of one cuisine
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the catalog call fails
    pub async fn by_cuisine(&self, cuisine: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        self.list(
            SearchFilter::Cuisine(cuisine.trim().to_owned()),
            &format!("{cuisine} recipes"),
        )
        .await
    }

    /// Name search; a blank name returns nothing without a call
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the catalog call fails
    pub async fn search(&self, name: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.list(SearchFilter::Name(name.to_owned()), "search results")
            .await
    }

    /// Name search within one cuisine; a blank cuisine falls back to `search`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the catalog call fails
    pub async fn search_in_cuisine(
        &self,
        name: &str,
        cuisine: &str,
    ) -> Result<Vec<RecipeSummary>, FetchError> {
        let (name, cuisine) = (name.trim(), cuisine.trim());
        if cuisine.is_empty() {
            return self.search(name).await;
        }
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.list(
            SearchFilter::NameInCuisine {
                name: name.to_owned(),
                cuisine: cuisine.to_owned(),
            },
            &format!("{cuisine} search results"),
        )
        .await
    }

    /// Several recipes at once; no ids means no call
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the catalog call fails
    pub async fn recipes_by_ids(&self, ids: &[u64]) -> Result<Vec<RecipeDetail>, FetchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.catalog.recipes_by_ids(ids).await.map_err(|e| {
            warn!(count = ids.len(), error = %e, "Bulk recipe fetch failed");
            FetchError::fetch_failed("recipes", e)
        })
    }

    async fn list(
        &self,
        filter: SearchFilter,
        resource: &str,
    ) -> Result<Vec<RecipeSummary>, FetchError> {
        let query = SearchQuery {
            filter,
            number: self.page_size,
        };
        let recipes = self.catalog.search_recipes(&query).await.map_err(|e| {
            warn!(resource, error = %e, "Recipe listing failed");
            FetchError::fetch_failed(resource, e)
        })?;
        debug!(resource, count = recipes.len(), "Recipe listing loaded");
        Ok(recipes)
    }
}
