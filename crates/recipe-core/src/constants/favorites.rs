// ABOUTME: Favorites store constants
// ABOUTME: Process-wide change channel name, capacity and default database location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Process-wide name of the favorites change notification channel
pub const FAVORITES_CHANGED_CHANNEL: &str = "favorites_changed";

/// Capacity of the favorites change broadcast channel
pub const CHANGE_CHANNEL_SIZE: usize = 32;

/// Default on-disk favorites database
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/favorites.db";

/// Database URL value selecting the in-memory store
pub const MEMORY_DATABASE_URL: &str = "memory";
