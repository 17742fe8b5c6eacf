// ABOUTME: Video reference model for recipe how-to clips
// ABOUTME: Identity is the external (YouTube) id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::catalog::VIDEO_WATCH_BASE_URL;
use serde::{Deserialize, Serialize};

/// Video associated with a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Video title
    pub title: String,
    /// External video id
    pub external_id: String,
}

impl VideoRef {
    /// Public watch URL
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{VIDEO_WATCH_BASE_URL}{}", self.external_id)
    }
}
