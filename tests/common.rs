// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, recipe fixtures, a scripted catalog and failing doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `recipe_session`

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use recipe_session::errors::{ApiError, AppError, AppResult};
use recipe_session::external::{RecipeCatalog, SearchFilter, SearchQuery};
use recipe_session::favorites::{Clock, FavoritesGateway, FavoritesStore, InMemoryFavoritesStore};
use recipe_session::models::{
    FavoriteEntry, Ingredient, InstructionGroup, RecipeDetail, RecipeSummary, Step, VideoRef,
};
use recipe_session::notifications::{NotificationScheduler, ScheduledNotification};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Recipe with one instruction group built from `steps`
pub fn sample_detail(id: u64, title: &str, steps: &[&str]) -> RecipeDetail {
    RecipeDetail {
        id,
        title: title.to_owned(),
        image_url: format!("https://img.example.com/{id}.jpg"),
        ready_minutes: 25,
        servings: 2,
        ingredients: vec![Ingredient {
            id: 1,
            original: "1 cup water".to_owned(),
        }],
        instruction_groups: vec![InstructionGroup {
            name: String::new(),
            steps: steps
                .iter()
                .zip(1_u32..)
                .map(|(text, number)| Step::new(number, *text))
                .collect(),
        }],
        nutrition: None,
    }
}

/// Steps numbered from 1
pub fn steps(texts: &[&str]) -> Vec<Step> {
    texts
        .iter()
        .zip(1_u32..)
        .map(|(text, number)| Step::new(number, *text))
        .collect()
}

/// Clock that advances one second on every read
pub fn ticking_clock() -> Clock {
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let counter = Arc::new(AtomicI64::new(0));
    Arc::new(move || base + ChronoDuration::seconds(counter.fetch_add(1, Ordering::SeqCst)))
}

/// Clock frozen at one instant
pub fn frozen_clock() -> Clock {
    let instant: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Arc::new(move || instant)
}

/// Gateway over a fresh in-memory store
pub fn memory_gateway() -> Arc<FavoritesGateway> {
    Arc::new(FavoritesGateway::with_clock(
        Arc::new(InMemoryFavoritesStore::new()),
        ticking_clock(),
    ))
}

/// What the scripted catalog answers to video searches
#[derive(Debug, Clone)]
pub enum VideoBehavior {
    /// One video titled after the query
    Found,
    /// Zero results
    Empty,
    /// Transport failure
    Fail,
}

/// Scripted in-process catalog with call counters and optional gates
pub struct MockCatalog {
    recipes: HashMap<u64, RecipeDetail>,
    listing: Vec<RecipeSummary>,
    video: VideoBehavior,
    failure: Option<ApiError>,
    gates: Mutex<HashMap<u64, Arc<Notify>>>,
    pub detail_calls: AtomicUsize,
    pub video_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub bulk_calls: AtomicUsize,
    pub last_query: Mutex<Option<SearchQuery>>,
}

impl MockCatalog {
    pub fn new(recipes: Vec<RecipeDetail>) -> Self {
        Self {
            listing: recipes.iter().map(RecipeDetail::summary).collect(),
            recipes: recipes.into_iter().map(|r| (r.id, r)).collect(),
            video: VideoBehavior::Found,
            failure: None,
            gates: Mutex::new(HashMap::new()),
            detail_calls: AtomicUsize::new(0),
            video_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            bulk_calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Answer video searches with `video`
    pub fn with_video(mut self, video: VideoBehavior) -> Self {
        self.video = video;
        self
    }

    /// Fail every detail, listing and bulk call with `error`
    pub fn failing(mut self, error: ApiError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Hold detail fetches for `id` until the returned gate is notified
    pub fn gate(&self, id: u64) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(id, Arc::clone(&gate));
        gate
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeCatalog for MockCatalog {
    async fn recipe_information(&self, id: u64) -> Result<RecipeDetail, ApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().get(&id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.recipes
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::status(404, "not found"))
    }

    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let results = match &query.filter {
            SearchFilter::Name(name) | SearchFilter::NameInCuisine { name, .. } => self
                .listing
                .iter()
                .filter(|r| r.title.to_lowercase().contains(&name.to_lowercase()))
                .cloned()
                .collect(),
            SearchFilter::Trending | SearchFilter::Cuisine(_) => self.listing.clone(),
        };
        Ok(results)
    }

    async fn recipes_by_ids(&self, ids: &[u64]) -> Result<Vec<RecipeDetail>, ApiError> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(ids.iter().filter_map(|id| self.recipes.get(id).cloned()).collect())
    }

    async fn search_videos(&self, query: &str, _number: u32) -> Result<Vec<VideoRef>, ApiError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        match self.video {
            VideoBehavior::Found => Ok(vec![VideoRef {
                title: format!("How to make {query}"),
                external_id: format!("yt-{}", query.len()),
            }]),
            VideoBehavior::Empty => Ok(Vec::new()),
            VideoBehavior::Fail => Err(ApiError::transport("connection reset")),
        }
    }
}

/// Favorites store whose every call fails
pub struct FailingStore;

#[async_trait]
impl FavoritesStore for FailingStore {
    async fn contains(&self, _recipe_id: u64) -> AppResult<bool> {
        Err(AppError::storage("store offline"))
    }

    async fn insert_if_absent(&self, _entry: &FavoriteEntry) -> AppResult<bool> {
        Err(AppError::storage("store offline"))
    }

    async fn remove(&self, _recipe_id: u64) -> AppResult<bool> {
        Err(AppError::storage("store offline"))
    }

    async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        Err(AppError::storage("store offline"))
    }

    async fn clear(&self) -> AppResult<u64> {
        Err(AppError::storage("store offline"))
    }
}

/// Notification scheduler that refuses everything but counts attempts
#[derive(Default)]
pub struct FailingNotifier {
    pub attempts: AtomicUsize,
}

impl NotificationScheduler for FailingNotifier {
    fn schedule(&self, _notification: &ScheduledNotification) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::internal("notifications disabled"))
    }
}

/// Let spawned tasks on the current-thread runtime make progress
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}
