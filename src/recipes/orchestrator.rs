// ABOUTME: Resolves a recipe id into detail, how-to video and favorite flag
// ABOUTME: Single-slot cache, shared in-flight fetches and last-requester-wins commits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe fetch orchestration
//!
//! Only the detail fetch is load-bearing. The video lookup and the favorite
//! check degrade to `None` and `false` on failure.

use crate::constants::catalog::VIDEO_LOOKUP_RESULTS;
use crate::errors::{AppError, AppResult, FetchError};
use crate::external::RecipeCatalog;
use crate::favorites::FavoritesGateway;
use crate::models::{RecipeDetail, VideoRef};
use futures_util::future::{BoxFuture, Shared, WeakShared};
use futures_util::FutureExt;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Everything the detail view needs for one recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRecipe {
    /// Primary recipe data
    pub detail: RecipeDetail,
    /// How-to video, when one was found
    pub video: Option<VideoRef>,
    /// Whether the recipe is a favorite
    pub is_favorite: bool,
}

type ResolutionFuture = BoxFuture<'static, Result<Arc<ResolvedRecipe>, FetchError>>;
type Resolution = Shared<ResolutionFuture>;

/// In-flight fetches are held weakly; a fetch dropped by every caller is freed
#[derive(Default)]
struct Slot {
    current: Option<Arc<ResolvedRecipe>>,
    latest_requested: Option<u64>,
    in_flight: HashMap<u64, WeakShared<ResolutionFuture>>,
}

impl Slot {
    /// A live fetch for `id` worth joining; failed fetches are never rejoined
    fn joinable(&mut self, id: u64) -> Option<Resolution> {
        self.in_flight.retain(|_, pending| pending.upgrade().is_some());
        self.in_flight
            .get(&id)
            .and_then(WeakShared::upgrade)
            .filter(|pending| !pending.peek().is_some_and(Result::is_err))
    }
}

/// Recipe resolver with a single-slot cache
pub struct RecipeOrchestrator {
    catalog: Arc<dyn RecipeCatalog>,
    favorites: Arc<FavoritesGateway>,
    slot: Mutex<Slot>,
}

impl RecipeOrchestrator {
    /// Orchestrator over the given catalog and favorites gateway
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, favorites: Arc<FavoritesGateway>) -> Self {
        Self {
            catalog,
            favorites,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Resolve recipe `id`.
    ///
    /// Returns the cached resolution when the slot already holds `id`. A
    /// concurrent call for an id already in flight awaits that fetch. The
    /// result is committed to the slot only if `id` is still the most
    /// recently requested id; a superseded caller still gets its own result.
    /// Dropping every caller of a fetch cancels it, and a later call for the
    /// same id starts over.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` if the recipe detail cannot be loaded
    pub async fn resolve_recipe(&self, id: u64) -> Result<Arc<ResolvedRecipe>, FetchError> {
        let resolution = {
            let mut slot = self.slot.lock().await;
            slot.latest_requested = Some(id);

            if let Some(current) = slot.current.as_ref().filter(|r| r.detail.id == id) {
                debug!(recipe_id = id, "Recipe served from cache");
                return Ok(Arc::clone(current));
            }

            if let Some(pending) = slot.joinable(id) {
                debug!(recipe_id = id, "Joining in-flight recipe fetch");
                pending
            } else {
                let pending = resolve_uncached(
                    Arc::clone(&self.catalog),
                    Arc::clone(&self.favorites),
                    id,
                )
                .boxed()
                .shared();
                if let Some(weak) = pending.downgrade() {
                    slot.in_flight.insert(id, weak);
                }
                pending
            }
        };

        let outcome = resolution.clone().await;

        let mut slot = self.slot.lock().await;
        slot.in_flight.retain(|_, pending| {
            pending
                .upgrade()
                .is_some_and(|live| !live.ptr_eq(&resolution))
        });

        if let Ok(resolved) = &outcome {
            if slot.latest_requested == Some(id) {
                slot.current = Some(Arc::clone(resolved));
            } else {
                debug!(recipe_id = id, "Superseded resolution not committed");
            }
        }

        outcome
    }

    /// Best-effort how-to video lookup by title
    pub async fn resolve_video(&self, title: &str) -> Option<VideoRef> {
        lookup_video(self.catalog.as_ref(), title).await
    }

    /// The cached resolution, if any
    pub async fn current(&self) -> Option<Arc<ResolvedRecipe>> {
        self.slot.lock().await.current.clone()
    }

    /// Flip the favorite flag of the cached recipe; returns the new flag
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing is cached, or a storage error
    pub async fn toggle_favorite(&self) -> AppResult<bool> {
        let current = self
            .current()
            .await
            .ok_or_else(|| AppError::not_found("Loaded recipe"))?;

        let now_favorite = if self.favorites.is_favorite(current.detail.id).await? {
            self.favorites.remove(current.detail.id).await?;
            false
        } else {
            self.favorites.add(&current.detail).await?;
            true
        };

        self.republish(current.detail.id, now_favorite).await;
        Ok(now_favorite)
    }

    /// Re-read favorite membership for the cached recipe
    pub async fn refresh_favorite_status(&self) -> Option<Arc<ResolvedRecipe>> {
        let current = self.current().await?;
        let is_favorite = favorite_status(&self.favorites, current.detail.id).await;
        if is_favorite == current.is_favorite {
            return Some(current);
        }
        self.republish(current.detail.id, is_favorite).await
    }

    /// Replace the slot with a copy carrying `is_favorite`, if it still holds `id`
    async fn republish(&self, id: u64, is_favorite: bool) -> Option<Arc<ResolvedRecipe>> {
        let mut slot = self.slot.lock().await;
        let current = slot.current.as_ref().filter(|r| r.detail.id == id)?;
        let updated = Arc::new(ResolvedRecipe {
            is_favorite,
            ..ResolvedRecipe::clone(current)
        });
        slot.current = Some(Arc::clone(&updated));
        Some(updated)
    }
}

async fn resolve_uncached(
    catalog: Arc<dyn RecipeCatalog>,
    favorites: Arc<FavoritesGateway>,
    id: u64,
) -> Result<Arc<ResolvedRecipe>, FetchError> {
    let detail = catalog.recipe_information(id).await.map_err(|e| {
        warn!(recipe_id = id, error = %e, "Recipe detail fetch failed");
        FetchError::fetch_failed(format!("recipe {id}"), e)
    })?;

    let video = lookup_video(catalog.as_ref(), &detail.title).await;
    let is_favorite = favorite_status(&favorites, id).await;

    info!(
        recipe_id = id,
        has_video = video.is_some(),
        is_favorite,
        "Recipe resolved"
    );
    Ok(Arc::new(ResolvedRecipe {
        detail,
        video,
        is_favorite,
    }))
}

async fn lookup_video(catalog: &dyn RecipeCatalog, title: &str) -> Option<VideoRef> {
    match catalog.search_videos(title, VIDEO_LOOKUP_RESULTS).await {
        Ok(videos) => {
            let video = videos.into_iter().next();
            if video.is_none() {
                debug!(title, "No video found");
            }
            video
        }
        Err(e) => {
            warn!(title, error = %e, "Video lookup failed");
            None
        }
    }
}

async fn favorite_status(favorites: &FavoritesGateway, id: u64) -> bool {
    favorites.is_favorite(id).await.unwrap_or_else(|e| {
        warn!(recipe_id = id, error = %e, "Favorite status unavailable");
        false
    })
}
