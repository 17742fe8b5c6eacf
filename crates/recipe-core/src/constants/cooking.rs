// ABOUTME: Cooking session timing constants
// ABOUTME: Tick period, fallback step duration and notification delay defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Step duration used when the instruction text names no duration
pub const FALLBACK_STEP_SECS: u64 = 1;

/// Period between session ticks, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Delay handed to the notification scheduler when a step completes
pub const NOTIFICATION_DELAY_SECS: u64 = 1;

/// Capacity of the per-session event broadcast channel
pub const SESSION_EVENT_CHANNEL_SIZE: usize = 64;

/// Seconds in one minute
pub const SECS_PER_MINUTE: u64 = 60;

/// Seconds in one hour
pub const SECS_PER_HOUR: u64 = 3_600;
