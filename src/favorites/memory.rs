// ABOUTME: Process-local favorites store backed by a tokio RwLock
// ABOUTME: Used for tests and when FAVORITES_DATABASE_URL is "memory"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FavoritesStore;
use crate::errors::AppResult;
use crate::models::FavoriteEntry;
use async_trait::async_trait;
use std::cmp::Reverse;
use tokio::sync::RwLock;

#[derive(Default)]
struct Entries {
    /// `(insertion sequence, entry)`
    rows: Vec<(u64, FavoriteEntry)>,
    next_seq: u64,
}

/// In-memory favorites
#[derive(Default)]
pub struct InMemoryFavoritesStore {
    entries: RwLock<Entries>,
}

impl InMemoryFavoritesStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavoritesStore {
    async fn contains(&self, recipe_id: u64) -> AppResult<bool> {
        Ok(self
            .entries
            .read()
            .await
            .rows
            .iter()
            .any(|(_, e)| e.recipe_id == recipe_id))
    }

    async fn insert_if_absent(&self, entry: &FavoriteEntry) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        if entries.rows.iter().any(|(_, e)| e.recipe_id == entry.recipe_id) {
            return Ok(false);
        }

        entries.next_seq += 1;
        let seq = entries.next_seq;
        entries.rows.push((seq, entry.clone()));
        Ok(true)
    }

    async fn remove(&self, recipe_id: u64) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.rows.len();
        entries.rows.retain(|(_, e)| e.recipe_id != recipe_id);
        Ok(entries.rows.len() != before)
    }

    async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        let mut rows = self.entries.read().await.rows.clone();
        rows.sort_by_key(|(seq, e)| Reverse((e.date_added, *seq)));
        Ok(rows.into_iter().map(|(_, e)| e).collect())
    }

    async fn clear(&self) -> AppResult<u64> {
        let mut entries = self.entries.write().await;
        let removed = entries.rows.len() as u64;
        entries.rows.clear();
        Ok(removed)
    }
}
