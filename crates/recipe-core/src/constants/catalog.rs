// ABOUTME: Remote recipe catalog constants for endpoints, query keys and limits
// ABOUTME: Mirrors the Spoonacular REST surface consumed by the catalog client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default catalog base URL
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Results requested per listing call
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;

/// Upper bound accepted by the catalog for `number`
pub const MAX_SEARCH_PAGE_SIZE: u32 = 100;

/// Videos requested when enriching a recipe
pub const VIDEO_LOOKUP_RESULTS: u32 = 1;

/// Query parameter carrying the API key on every request
pub const API_KEY_PARAM: &str = "apiKey";

/// Endpoint paths relative to the base URL
pub mod endpoints {
    /// Full-text and cuisine search
    pub const COMPLEX_SEARCH: &str = "/recipes/complexSearch";
    /// Several recipes by id in one call
    pub const INFORMATION_BULK: &str = "/recipes/informationBulk";
    /// Video search
    pub const VIDEO_SEARCH: &str = "/food/videos/search";

    /// Single recipe information path
    #[must_use]
    pub fn recipe_information(id: u64) -> String {
        format!("/recipes/{id}/information")
    }
}

/// Base URL for watching a catalog video by its external id
pub const VIDEO_WATCH_BASE_URL: &str = "https://www.youtube.com/watch?v=";
