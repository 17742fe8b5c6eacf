// ABOUTME: Favorites gateway: persisted favorite recipes plus a change-notification channel
// ABOUTME: Normalizes duplicate adds and absent removes to no-ops and announces mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Favorites
//!
//! [`FavoritesGateway`] is the one entry point for reading and mutating the
//! favorites set. Storage sits behind [`FavoritesStore`]; listeners subscribe
//! to a payload-free [`FavoritesChanged`] broadcast and re-read on receipt.

/// Re-reading favorites stream for list views
pub mod feed;
/// Process-local store
pub mod memory;
/// `SQLite` store
pub mod sqlite;

pub use feed::FavoritesFeed;
pub use memory::InMemoryFavoritesStore;
pub use sqlite::SqliteFavoritesStore;

use crate::config::FavoritesConfig;
use crate::constants::favorites::{
    CHANGE_CHANNEL_SIZE, FAVORITES_CHANGED_CHANNEL, MEMORY_DATABASE_URL,
};
use crate::errors::AppResult;
use crate::models::{FavoriteEntry, RecipeDetail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Persistence for the favorites set.
///
/// Stores enforce `recipe_id` uniqueness themselves so concurrent inserts
/// cannot produce duplicates.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Whether `recipe_id` is stored
    async fn contains(&self, recipe_id: u64) -> AppResult<bool>;

    /// Insert unless present; `true` when a row was added
    async fn insert_if_absent(&self, entry: &FavoriteEntry) -> AppResult<bool>;

    /// Delete `recipe_id`; `true` when a row was removed
    async fn remove(&self, recipe_id: u64) -> AppResult<bool>;

    /// Every entry, most recently added first (ties: latest insertion first)
    async fn list(&self) -> AppResult<Vec<FavoriteEntry>>;

    /// Delete everything; returns the number of rows removed
    async fn clear(&self) -> AppResult<u64>;
}

/// Payload-free "favorites changed" signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoritesChanged;

/// Source of `date_added` timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Favorites read/write entry point with change notifications
pub struct FavoritesGateway {
    store: Arc<dyn FavoritesStore>,
    clock: Clock,
    changes: broadcast::Sender<FavoritesChanged>,
}

impl FavoritesGateway {
    /// Gateway over `store` stamping entries with the wall clock
    #[must_use]
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self::with_clock(store, Arc::new(Utc::now))
    }

    /// Gateway with an injected clock
    #[must_use]
    pub fn with_clock(store: Arc<dyn FavoritesStore>, clock: Clock) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_SIZE);
        Self {
            store,
            clock,
            changes,
        }
    }

    /// Open the store named by `config` (`memory` or a `sqlite:` URL)
    ///
    /// # Errors
    ///
    /// Returns a storage error if the database cannot be opened or migrated
    pub async fn open(config: &FavoritesConfig) -> AppResult<Self> {
        let store: Arc<dyn FavoritesStore> = if config.database_url == MEMORY_DATABASE_URL {
            Arc::new(InMemoryFavoritesStore::new())
        } else {
            Arc::new(SqliteFavoritesStore::connect(&config.database_url).await?)
        };
        Ok(Self::new(store))
    }

    /// Whether `recipe_id` is a favorite
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub async fn is_favorite(&self, recipe_id: u64) -> AppResult<bool> {
        self.store.contains(recipe_id).await
    }

    /// Favorite `recipe`; already favorited is a silent no-op
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be written
    pub async fn add(&self, recipe: &RecipeDetail) -> AppResult<()> {
        let entry = FavoriteEntry::from_detail(recipe, (self.clock)());
        if self.store.insert_if_absent(&entry).await? {
            info!(recipe_id = recipe.id, "Recipe added to favorites");
            self.announce();
        } else {
            debug!(recipe_id = recipe.id, "Recipe already a favorite");
        }
        Ok(())
    }

    /// Unfavorite `recipe_id`; announces the change even when it was absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be written
    pub async fn remove(&self, recipe_id: u64) -> AppResult<()> {
        let removed = self.store.remove(recipe_id).await?;
        info!(recipe_id, removed, "Recipe removed from favorites");
        self.announce();
        Ok(())
    }

    /// All favorites, most recent first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        self.store.list().await
    }

    /// Remove every favorite and announce once
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be written
    pub async fn clear(&self) -> AppResult<()> {
        let removed = self.store.clear().await?;
        info!(removed, "Favorites cleared");
        self.announce();
        Ok(())
    }

    /// Receive change signals from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesChanged> {
        self.changes.subscribe()
    }

    /// Stream of freshly read lists, one per change signal
    #[must_use]
    pub fn feed(self: &Arc<Self>) -> FavoritesFeed {
        FavoritesFeed::new(Arc::clone(self))
    }

    fn announce(&self) {
        let listeners = self.changes.send(FavoritesChanged).unwrap_or(0);
        debug!(channel = FAVORITES_CHANGED_CHANNEL, listeners, "Favorites change published");
    }
}
