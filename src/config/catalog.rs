// ABOUTME: Remote recipe catalog configuration types
// ABOUTME: API key, base URL, HTTP timeouts and listing page size loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_var_or, parse_env};
use crate::constants::catalog::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_SEARCH_PAGE_SIZE,
    DEFAULT_TIMEOUT_SECS, MAX_SEARCH_PAGE_SIZE,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Recipe catalog API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CatalogApiConfig {
    /// Catalog API key, sent as the `apiKey` query parameter
    pub api_key: Option<String>,
    /// Catalog base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Results requested per search/listing call
    pub search_page_size: u32,
}

impl Default for CatalogApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}

impl CatalogApiConfig {
    /// Load catalog configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a config error if a numeric variable is malformed or the page size is out of range
    pub fn from_env() -> AppResult<Self> {
        let search_page_size = parse_env("RECIPE_SEARCH_PAGE_SIZE", DEFAULT_SEARCH_PAGE_SIZE)?;
        if search_page_size == 0 || search_page_size > MAX_SEARCH_PAGE_SIZE {
            return Err(AppError::config(format!(
                "RECIPE_SEARCH_PAGE_SIZE must be between 1 and {MAX_SEARCH_PAGE_SIZE}"
            )));
        }

        Ok(Self {
            api_key: env::var("RECIPE_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: env_var_or("RECIPE_API_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            timeout_secs: parse_env("RECIPE_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                "RECIPE_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            search_page_size,
        })
    }

    /// API key, or a config error naming the variable to set
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigMissing` when no key is configured
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::config_missing("RECIPE_API_KEY"))
    }
}

impl fmt::Debug for CatalogApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("search_page_size", &self.search_page_size)
            .finish()
    }
}
