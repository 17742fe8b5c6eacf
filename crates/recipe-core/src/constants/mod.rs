// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the catalog API, cooking sessions, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Remote recipe catalog endpoints, query parameter names and defaults
pub mod catalog;
/// Cooking session timing defaults
pub mod cooking;
/// Favorites store and change channel constants
pub mod favorites;
/// Service identity used in logging
pub mod service_names {
    /// Name reported by the library and CLI in structured logs
    pub const RECIPE_SESSION: &str = "recipe-session";
}
