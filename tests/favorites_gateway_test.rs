// ABOUTME: Tests for the favorites gateway over the in-memory and SQLite stores
// ABOUTME: Covers idempotent add, remove and clear notifications, ordering and the feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{frozen_clock, sample_detail, ticking_clock};
use recipe_session::config::FavoritesConfig;
use recipe_session::favorites::{
    Clock, FavoritesChanged, FavoritesGateway, FavoritesStore, InMemoryFavoritesStore,
    SqliteFavoritesStore,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

async fn sqlite_store(dir: &TempDir) -> Result<Arc<dyn FavoritesStore>> {
    let url = format!("sqlite:{}", dir.path().join("favorites.db").display());
    Ok(Arc::new(SqliteFavoritesStore::connect(&url).await?))
}

/// One in-memory and one on-disk gateway sharing `clock`
async fn gateways(dir: &TempDir, clock: &Clock) -> Result<Vec<FavoritesGateway>> {
    common::init_test_logging();
    Ok(vec![
        FavoritesGateway::with_clock(Arc::new(InMemoryFavoritesStore::new()), clock.clone()),
        FavoritesGateway::with_clock(sqlite_store(dir).await?, clock.clone()),
    ])
}

fn drain(rx: &mut Receiver<FavoritesChanged>) -> usize {
    let mut count = 0;
    loop {
        match rx.try_recv() {
            Ok(FavoritesChanged) => count += 1,
            Err(TryRecvError::Empty | TryRecvError::Closed) => return count,
            Err(TryRecvError::Lagged(n)) => count += usize::try_from(n).unwrap(),
        }
    }
}

#[tokio::test]
async fn test_add_is_idempotent_and_notifies_once() -> Result<()> {
    let dir = TempDir::new()?;
    for gateway in gateways(&dir, &ticking_clock()).await? {
        let mut rx = gateway.subscribe();
        let recipe = sample_detail(42, "Shakshuka", &["Simmer 10 minutes"]);

        gateway.add(&recipe).await?;
        gateway.add(&recipe).await?;

        assert!(gateway.is_favorite(42).await?);
        assert_eq!(gateway.list().await?.len(), 1);
        assert_eq!(drain(&mut rx), 1);
    }
    Ok(())
}

#[tokio::test]
async fn test_remove_always_notifies() -> Result<()> {
    let dir = TempDir::new()?;
    for gateway in gateways(&dir, &ticking_clock()).await? {
        gateway.add(&sample_detail(7, "Dal", &[])).await?;
        let mut rx = gateway.subscribe();

        gateway.remove(7).await?;
        gateway.remove(7).await?;

        assert!(!gateway.is_favorite(7).await?);
        assert!(gateway.list().await?.is_empty());
        assert_eq!(drain(&mut rx), 2);
    }
    Ok(())
}

#[tokio::test]
async fn test_list_is_most_recent_first() -> Result<()> {
    let dir = TempDir::new()?;
    for gateway in gateways(&dir, &ticking_clock()).await? {
        for id in 1..=3 {
            gateway.add(&sample_detail(id, &format!("Recipe {id}"), &[])).await?;
        }

        let ids: Vec<u64> = gateway.list().await?.iter().map(|f| f.recipe_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
    Ok(())
}

#[tokio::test]
async fn test_equal_timestamps_order_by_latest_insertion() -> Result<()> {
    let dir = TempDir::new()?;
    for gateway in gateways(&dir, &frozen_clock()).await? {
        for id in [10, 30, 20] {
            gateway.add(&sample_detail(id, "Same instant", &[])).await?;
        }

        let ids: Vec<u64> = gateway.list().await?.iter().map(|f| f.recipe_id).collect();
        assert_eq!(ids, vec![20, 30, 10]);
    }
    Ok(())
}

#[tokio::test]
async fn test_clear_removes_everything_and_notifies_once() -> Result<()> {
    let dir = TempDir::new()?;
    for gateway in gateways(&dir, &ticking_clock()).await? {
        gateway.add(&sample_detail(1, "Soup", &[])).await?;
        gateway.add(&sample_detail(2, "Bread", &[])).await?;
        let mut rx = gateway.subscribe();

        gateway.clear().await?;

        assert!(gateway.list().await?.is_empty());
        assert_eq!(drain(&mut rx), 1);

        gateway.clear().await?;
        assert_eq!(drain(&mut rx), 1);
    }
    Ok(())
}

#[tokio::test]
async fn test_entries_carry_recipe_fields_and_clock_time() -> Result<()> {
    let dir = TempDir::new()?;
    let clock = frozen_clock();
    let expected_time = clock();
    for gateway in gateways(&dir, &clock).await? {
        let recipe = sample_detail(99, "Gnocchi", &[]);
        gateway.add(&recipe).await?;

        let entry = gateway.list().await?.remove(0);
        assert_eq!(entry.title, "Gnocchi");
        assert_eq!(entry.image_url, recipe.image_url);
        assert_eq!(entry.ready_minutes, 25);
        assert_eq!(entry.date_added, expected_time);
    }
    Ok(())
}

#[tokio::test]
async fn test_sqlite_favorites_survive_reopen() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    {
        let gateway = FavoritesGateway::new(sqlite_store(&dir).await?);
        gateway.add(&sample_detail(5, "Curry", &[])).await?;
    }

    let reopened = FavoritesGateway::new(sqlite_store(&dir).await?);
    assert!(reopened.is_favorite(5).await?);
    Ok(())
}

#[tokio::test]
async fn test_open_selects_store_from_config() -> Result<()> {
    let memory = FavoritesGateway::open(&FavoritesConfig {
        database_url: "memory".to_owned(),
    })
    .await?;
    memory.add(&sample_detail(1, "Pho", &[])).await?;
    assert!(memory.is_favorite(1).await?);

    let dir = TempDir::new()?;
    let nested = dir.path().join("nested").join("favorites.db");
    let on_disk = FavoritesGateway::open(&FavoritesConfig {
        database_url: format!("sqlite:{}", nested.display()),
    })
    .await?;
    on_disk.add(&sample_detail(2, "Laksa", &[])).await?;
    assert!(nested.exists());
    Ok(())
}

#[tokio::test]
async fn test_feed_rereads_after_each_change() -> Result<()> {
    common::init_test_logging();
    let gateway = common::memory_gateway();
    let mut feed = gateway.feed();
    assert!(feed.current().await?.is_empty());

    gateway.add(&sample_detail(1, "Tacos", &[])).await?;
    let after_add = feed.next().await.unwrap()?;
    assert_eq!(after_add.len(), 1);

    gateway.remove(1).await?;
    let after_remove = feed.next().await.unwrap()?;
    assert!(after_remove.is_empty());
    Ok(())
}
