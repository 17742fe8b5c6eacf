// ABOUTME: Tests for recipe listings: trending, cuisine, name search and bulk lookup
// ABOUTME: Verifies blank inputs skip the catalog and failures map to FetchError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{sample_detail, MockCatalog};
use recipe_session::errors::{ApiError, FetchError};
use recipe_session::external::SearchFilter;
use recipe_session::models::Difficulty;
use recipe_session::recipes::RecipeBrowser;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn catalog() -> Arc<MockCatalog> {
    common::init_test_logging();
    Arc::new(MockCatalog::new(vec![
        sample_detail(11, "Green Curry", &[]),
        sample_detail(12, "Red Curry", &[]),
        sample_detail(13, "Mango Sticky Rice", &[]),
    ]))
}

#[tokio::test]
async fn test_trending_uses_configured_page_size() -> Result<()> {
    let catalog = catalog();
    let browser = RecipeBrowser::new(catalog.clone(), 7);

    let recipes = browser.trending().await?;
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].difficulty, Difficulty::Easy);

    let query = catalog.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.filter, SearchFilter::Trending);
    assert_eq!(query.number, 7);
    Ok(())
}

#[tokio::test]
async fn test_by_cuisine_passes_cuisine_filter() -> Result<()> {
    let catalog = catalog();
    RecipeBrowser::new(catalog.clone(), 10).by_cuisine(" Thai ").await?;

    let query = catalog.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.filter, SearchFilter::Cuisine("Thai".to_owned()));
    Ok(())
}

#[tokio::test]
async fn test_search_by_name() -> Result<()> {
    let browser = RecipeBrowser::new(catalog(), 10);
    let titles: Vec<String> = browser
        .search("curry")
        .await?
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Green Curry", "Red Curry"]);
    Ok(())
}

#[tokio::test]
async fn test_search_in_cuisine_sends_both_filters() -> Result<()> {
    let catalog = catalog();
    let browser = RecipeBrowser::new(catalog.clone(), 10);

    let titles: Vec<String> = browser
        .search_in_cuisine(" red ", " Thai ")
        .await?
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Red Curry"]);

    let query = catalog.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(
        query.filter,
        SearchFilter::NameInCuisine {
            name: "red".to_owned(),
            cuisine: "Thai".to_owned(),
        }
    );

    browser.search_in_cuisine("mango", "  ").await?;
    let query = catalog.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.filter, SearchFilter::Name("mango".to_owned()));

    assert!(browser.search_in_cuisine(" ", "Thai").await?.is_empty());
    assert_eq!(catalog.search_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_blank_search_makes_no_call() -> Result<()> {
    let catalog = catalog();
    let browser = RecipeBrowser::new(catalog.clone(), 10);

    assert!(browser.search("").await?.is_empty());
    assert!(browser.search("   ").await?.is_empty());
    assert_eq!(catalog.search_calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_recipes_by_ids() -> Result<()> {
    let catalog = catalog();
    let browser = RecipeBrowser::new(catalog.clone(), 10);

    assert!(browser.recipes_by_ids(&[]).await?.is_empty());
    assert_eq!(catalog.bulk_calls.load(Ordering::SeqCst), 0);

    let recipes = browser.recipes_by_ids(&[13, 11]).await?;
    let ids: Vec<u64> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![13, 11]);
    assert_eq!(catalog.bulk_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_listing_failures_map_to_fetch_failed() {
    common::init_test_logging();
    let failing = Arc::new(MockCatalog::new(Vec::new()).failing(ApiError::transport("timeout")));
    let browser = RecipeBrowser::new(failing, 10);

    let error = browser.trending().await.unwrap_err();
    assert_eq!(*error.cause(), ApiError::transport("timeout"));

    let error = browser.recipes_by_ids(&[1]).await.unwrap_err();
    assert!(matches!(error, FetchError::FetchFailed { .. }));
}
