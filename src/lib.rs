// ABOUTME: Main library entry point for the recipe session engine
// ABOUTME: Recipe resolution, favorites, discovery and timed cooking sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Session
//!
//! Client-side engine for a recipe browsing and guided cooking application.
//!
//! ## Architecture
//!
//! - **External**: `RecipeCatalog` trait and the HTTP catalog client
//! - **Recipes**: detail resolution with a single-slot cache, and listings
//! - **Favorites**: persisted favorites with change notifications
//! - **Cooking**: step duration parsing, the session state machine and its tick runner
//! - **Notifications**: step-completion notification scheduling
//! - **Config**: environment-based configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_session::config::AppConfig;
//! use recipe_session::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     println!("Catalog at {}", config.catalog.base_url);
//!     Ok(())
//! }
//! ```

pub use recipe_core::{constants, models};

/// Environment configuration
pub mod config;
/// Cooking sessions
pub mod cooking;
/// Error types
pub mod errors;
/// Remote recipe catalog
pub mod external;
/// Favorites persistence and change notifications
pub mod favorites;
/// Shared HTTP client
pub mod http_client;
/// Structured logging setup
pub mod logging;
/// Notification scheduling
pub mod notifications;
/// Recipe resolution and discovery
pub mod recipes;
