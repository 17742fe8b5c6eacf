// ABOUTME: External API client modules (remote recipe catalog)
// ABOUTME: Provides the catalog trait consumed by the orchestrator and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod catalog_client;

pub use catalog_client::{RecipeCatalog, SearchFilter, SearchQuery, SpoonacularClient};
