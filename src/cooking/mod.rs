// ABOUTME: Guided cooking: step duration parsing, the session state machine and its runner
// ABOUTME: Re-exports the session types used by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Step text duration extraction
pub mod duration;
/// Tokio task driving the countdown
pub mod runner;
/// Cooking session state machine
pub mod session;

pub use duration::{parse_step_duration, StepDuration};
pub use runner::CookingSessionHandle;
pub use session::{CookingSession, SessionEvent, SessionSettings, SessionSnapshot, SessionState};
