// ABOUTME: Extracts the timer duration mentioned in a recipe step's text
// ABOUTME: First "<n> minute(s)|hour(s)" mention wins; no mention yields Unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::cooking::{SECS_PER_HOUR, SECS_PER_MINUTE};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// `<integer> <minute|hour>` prefix with optional plural, case-insensitive
static DURATION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+(minute|hour)s?").ok());

/// Outcome of scanning a step for a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDuration {
    /// The step text names a duration
    Known(Duration),
    /// No usable duration in the text
    Unknown,
}

impl StepDuration {
    /// The known duration, or `fallback`
    #[must_use]
    pub const fn or_fallback(self, fallback: Duration) -> Duration {
        match self {
            Self::Known(duration) => duration,
            Self::Unknown => fallback,
        }
    }

    /// Whether the text named a duration
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Scan `text` for the first duration mention.
///
/// Mentions are not summed: "Bake 1 hour then rest 10 minutes" is one hour.
/// A mention whose number overflows is skipped in favor of the next one.
#[must_use]
pub fn parse_step_duration(text: &str) -> StepDuration {
    let Some(pattern) = DURATION_PATTERN.as_ref() else {
        return StepDuration::Unknown;
    };

    pattern
        .captures_iter(text)
        .find_map(|caps| {
            let quantity: u64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str();
            let per_unit = if unit.eq_ignore_ascii_case("hour") {
                SECS_PER_HOUR
            } else {
                SECS_PER_MINUTE
            };
            quantity.checked_mul(per_unit).map(Duration::from_secs)
        })
        .map_or(StepDuration::Unknown, StepDuration::Known)
}
