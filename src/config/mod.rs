// ABOUTME: Configuration management module for catalog, cooking and favorites settings
// ABOUTME: Environment-only configuration; no configuration files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: top-level `AppConfig` plus cooking and favorites settings
//! - **Catalog**: remote recipe API key, base URL, timeouts and page size

/// Remote recipe catalog configuration
pub mod catalog;
/// Environment-driven application configuration
pub mod environment;

pub use catalog::CatalogApiConfig;
pub use environment::{AppConfig, CookingConfig, FavoritesConfig};
