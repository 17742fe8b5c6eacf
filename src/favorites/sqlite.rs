// ABOUTME: SQLite favorites store using sqlx with runtime-checked queries
// ABOUTME: INSERT OR IGNORE on the recipe_id primary key keeps favorites unique
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FavoritesStore;
use crate::errors::{AppError, AppResult};
use crate::models::FavoriteEntry;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// Favorites persisted in `SQLite`
#[derive(Clone)]
pub struct SqliteFavoritesStore {
    pool: SqlitePool,
}

impl SqliteFavoritesStore {
    /// Open (creating if needed) the database at `database_url` and migrate it
    ///
    /// # Errors
    ///
    /// Returns a storage error if the URL is invalid or the database cannot be opened
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::storage(format!("Invalid favorites database URL: {e}")))?
            .create_if_missing(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!("Failed to create favorites directory: {e}"))
                })?;
            }
        }

        // `sqlite::memory:` databases live only as long as their connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::storage(format!("Failed to open favorites database: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database_url, "Favorites database ready");
        Ok(store)
    }

    /// Store over an existing pool; call [`Self::migrate`] before use
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the favorites table if missing
    ///
    /// # Errors
    ///
    /// Returns a storage error if the schema cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS favorites (
                recipe_id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                image_url TEXT NOT NULL,
                ready_minutes INTEGER NOT NULL,
                date_added TEXT NOT NULL,
                seq INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create favorites table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_favorites_date_added ON favorites(date_added, seq)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create favorites index: {e}")))?;

        Ok(())
    }
}

fn db_id(recipe_id: u64) -> AppResult<i64> {
    i64::try_from(recipe_id)
        .map_err(|_| AppError::invalid_input(format!("Recipe id {recipe_id} out of range")))
}

/// Fixed-width UTC timestamps so text ordering matches time ordering
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn row_to_entry(row: &SqliteRow) -> AppResult<FavoriteEntry> {
    let recipe_id: i64 = row.get("recipe_id");
    let ready_minutes: i64 = row.get("ready_minutes");
    let date_added: String = row.get("date_added");

    Ok(FavoriteEntry {
        recipe_id: recipe_id as u64,
        title: row.get("title"),
        image_url: row.get("image_url"),
        ready_minutes: ready_minutes as u32,
        date_added: DateTime::parse_from_rfc3339(&date_added)
            .map_err(|e| AppError::storage(format!("Invalid favorite timestamp: {e}")))?
            .with_timezone(&Utc),
    })
}

#[async_trait]
impl FavoritesStore for SqliteFavoritesStore {
    async fn contains(&self, recipe_id: u64) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM favorites WHERE recipe_id = $1")
            .bind(db_id(recipe_id)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to check favorite: {e}")))?;
        Ok(row.is_some())
    }

    async fn insert_if_absent(&self, entry: &FavoriteEntry) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            INSERT OR IGNORE INTO favorites
                (recipe_id, title, image_url, ready_minutes, date_added, seq)
            SELECT $1, $2, $3, $4, $5, COALESCE(MAX(seq), 0) + 1 FROM favorites
            ",
        )
        .bind(db_id(entry.recipe_id)?)
        .bind(&entry.title)
        .bind(&entry.image_url)
        .bind(i64::from(entry.ready_minutes))
        .bind(format_timestamp(&entry.date_added))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to add favorite: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, recipe_id: u64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE recipe_id = $1")
            .bind(db_id(recipe_id)?)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to remove favorite: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        let rows = sqlx::query(
            r"
            SELECT recipe_id, title, image_url, ready_minutes, date_added
            FROM favorites
            ORDER BY date_added DESC, seq DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to list favorites: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM favorites")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to clear favorites: {e}")))?;

        Ok(result.rows_affected())
    }
}
