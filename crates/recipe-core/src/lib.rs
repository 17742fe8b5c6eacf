// ABOUTME: Core types and constants for the recipe session engine
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! session engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` plus the catalog-facing `ApiError` and `FetchError`
//! - **constants**: Catalog endpoints, cooking defaults, favorites channel names
//! - **models**: Recipes, steps, nutrition, videos, favorites

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`RecipeDetail`, `Step`, `VideoRef`, `FavoriteEntry`, etc.)
pub mod models;
