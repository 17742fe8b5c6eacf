// ABOUTME: Environment configuration management for catalog, cooking and favorites settings
// ABOUTME: Handles environment variables, numeric parsing, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use super::catalog::CatalogApiConfig;
use crate::constants::cooking::{
    FALLBACK_STEP_SECS, NOTIFICATION_DELAY_SECS, TICK_INTERVAL_MS,
};
use crate::constants::favorites::DEFAULT_DATABASE_URL;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Remote recipe catalog settings
    pub catalog: CatalogApiConfig,
    /// Cooking session timing
    pub cooking: CookingConfig,
    /// Favorites persistence
    pub favorites: FavoritesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if any variable is set to a malformed value
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            catalog: CatalogApiConfig::from_env()?,
            cooking: CookingConfig::from_env()?,
            favorites: FavoritesConfig::from_env(),
        };

        info!(
            catalog.base_url = %config.catalog.base_url,
            catalog.api_key_set = config.catalog.api_key.is_some(),
            favorites.database_url = %config.favorites.database_url,
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Cooking session timing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookingConfig {
    /// Step duration used when the instruction names none
    pub fallback_step_secs: u64,
    /// Period between timer ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Delay handed to the notification scheduler on step completion
    pub notification_delay_secs: u64,
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self {
            fallback_step_secs: FALLBACK_STEP_SECS,
            tick_interval_ms: TICK_INTERVAL_MS,
            notification_delay_secs: NOTIFICATION_DELAY_SECS,
        }
    }
}

impl CookingConfig {
    /// Load cooking configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a config error if a variable is malformed or zero where a period is required
    pub fn from_env() -> AppResult<Self> {
        let fallback_step_secs = parse_env("COOKING_FALLBACK_STEP_SECS", FALLBACK_STEP_SECS)?;
        let tick_interval_ms = parse_env("COOKING_TICK_INTERVAL_MS", TICK_INTERVAL_MS)?;

        if fallback_step_secs == 0 {
            return Err(AppError::config(
                "COOKING_FALLBACK_STEP_SECS must be at least 1",
            ));
        }
        if tick_interval_ms == 0 {
            return Err(AppError::config("COOKING_TICK_INTERVAL_MS must be at least 1"));
        }

        Ok(Self {
            fallback_step_secs,
            tick_interval_ms,
            notification_delay_secs: parse_env(
                "COOKING_NOTIFICATION_DELAY_SECS",
                NOTIFICATION_DELAY_SECS,
            )?,
        })
    }

    /// Tick period as a `Duration`
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Favorites persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoritesConfig {
    /// `sqlite:` URL, or `memory` for a process-local store
    pub database_url: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

impl FavoritesConfig {
    /// Load favorites configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database_url: env_var_or("FAVORITES_DATABASE_URL", DEFAULT_DATABASE_URL),
        }
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
pub(crate) fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key} has invalid value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
