// ABOUTME: Favorites feed that re-reads the list after every change signal
// ABOUTME: A lagged receiver is treated as a change so no update is missed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FavoritesChanged, FavoritesGateway};
use crate::errors::AppResult;
use crate::models::FavoriteEntry;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

/// Live view of the favorites list
pub struct FavoritesFeed {
    gateway: Arc<FavoritesGateway>,
    changes: broadcast::Receiver<FavoritesChanged>,
}

impl FavoritesFeed {
    pub(super) fn new(gateway: Arc<FavoritesGateway>) -> Self {
        let changes = gateway.subscribe();
        Self { gateway, changes }
    }

    /// Current list without waiting for a change
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub async fn current(&self) -> AppResult<Vec<FavoriteEntry>> {
        self.gateway.list().await
    }

    /// Wait for the next change and return the re-read list.
    ///
    /// `None` once the change channel is closed.
    pub async fn next(&mut self) -> Option<AppResult<Vec<FavoriteEntry>>> {
        match self.changes.recv().await {
            Ok(FavoritesChanged) => {}
            Err(RecvError::Lagged(skipped)) => {
                debug!(skipped, "Favorites feed lagged, re-reading");
            }
            Err(RecvError::Closed) => return None,
        }
        Some(self.gateway.list().await)
    }
}
