// ABOUTME: Cooking session state machine over a recipe's step snapshot
// ABOUTME: Owns the step cursor, countdown, completed steps and step-completion notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cooking session state machine
//!
//! The machine is synchronous and clock-free: `tick` is driven from outside
//! (see [`super::runner`]) once per tick period while the session is
//! `Running`. Every transition is published as a [`SessionEvent`].
//!
//! Cursor convention: `0 <= cursor <= steps.len()`, and `cursor == steps.len()`
//! only in `Finished`.

use super::duration::parse_step_duration;
use crate::config::CookingConfig;
use crate::constants::cooking::SESSION_EVENT_CHANNEL_SIZE;
use crate::models::{RecipeDetail, Step};
use crate::notifications::{NotificationScheduler, ScheduledNotification};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Created, countdown not started yet
    Idle,
    /// Countdown running
    Running,
    /// Countdown stopped (by the user or because the step elapsed)
    Paused,
    /// Every step done; no further timer activity
    Finished,
}

/// Transition notifications published by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Countdown (re)started for a step
    StepStarted {
        /// Step number as shown to the user
        step_number: u32,
        /// Time left on the countdown
        remaining: Duration,
    },
    /// One tick elapsed
    Ticked {
        /// Step number as shown to the user
        step_number: u32,
        /// Time left on the countdown
        remaining: Duration,
    },
    /// A step was marked completed for the first time
    StepCompleted {
        /// Step number as shown to the user
        step_number: u32,
    },
    /// Countdown stopped
    Paused {
        /// Step number as shown to the user
        step_number: u32,
        /// Time left on the countdown
        remaining: Duration,
    },
    /// Session reached the terminal state
    Finished {
        /// Completed step numbers in completion order
        completed: Vec<u32>,
    },
}

/// Timing knobs for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Duration for steps whose text names none
    pub fallback_step: Duration,
    /// Delay passed to the notification scheduler
    pub notification_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&CookingConfig::default())
    }
}

impl From<&CookingConfig> for SessionSettings {
    fn from(config: &CookingConfig) -> Self {
        Self {
            fallback_step: Duration::from_secs(config.fallback_step_secs),
            notification_delay: Duration::from_secs(config.notification_delay_secs),
        }
    }
}

/// Point-in-time view of a session for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Recipe title
    pub title: String,
    /// Lifecycle state
    pub state: SessionState,
    /// Index of the current step (`total_steps` once finished)
    pub cursor: usize,
    /// Number of steps in the session
    pub total_steps: usize,
    /// Current step, `None` once finished
    pub current_step: Option<Step>,
    /// Full duration of the current step
    pub step_duration: Duration,
    /// Time left on the countdown
    pub time_remaining: Duration,
    /// Completed step numbers in completion order
    pub completed: Vec<u32>,
}

/// Cooking session over an immutable step snapshot
pub struct CookingSession {
    title: String,
    steps: Vec<Step>,
    cursor: usize,
    completed: Vec<u32>,
    step_duration: Duration,
    time_remaining: Duration,
    state: SessionState,
    settings: SessionSettings,
    notifier: Arc<dyn NotificationScheduler>,
    events: broadcast::Sender<SessionEvent>,
}

impl CookingSession {
    /// Create a session; with no steps it starts `Finished`
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        steps: Vec<Step>,
        notifier: Arc<dyn NotificationScheduler>,
        settings: SessionSettings,
    ) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CHANNEL_SIZE);
        let mut session = Self {
            title: title.into(),
            steps,
            cursor: 0,
            completed: Vec::new(),
            step_duration: Duration::ZERO,
            time_remaining: Duration::ZERO,
            state: SessionState::Idle,
            settings,
            notifier,
            events,
        };

        if session.steps.is_empty() {
            session.state = SessionState::Finished;
        } else {
            session.load_current_step();
        }
        session
    }

    /// Session over the first instruction group of a recipe
    #[must_use]
    pub fn for_recipe(
        recipe: &RecipeDetail,
        notifier: Arc<dyn NotificationScheduler>,
        settings: SessionSettings,
    ) -> Self {
        Self::new(
            recipe.title.clone(),
            recipe.first_group_steps().to_vec(),
            notifier,
            settings,
        )
    }

    /// Lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the current step
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Time left on the countdown
    #[must_use]
    pub const fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Full duration of the current step
    #[must_use]
    pub const fn step_duration(&self) -> Duration {
        self.step_duration
    }

    /// Completed step numbers in completion order
    #[must_use]
    pub fn completed(&self) -> &[u32] {
        &self.completed
    }

    /// Receive transition events from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Sender side of the event channel, for holders that outlive a borrow
    pub(crate) fn event_sender(&self) -> broadcast::Sender<SessionEvent> {
        self.events.clone()
    }

    /// Snapshot for display
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            title: self.title.clone(),
            state: self.state,
            cursor: self.cursor,
            total_steps: self.steps.len(),
            current_step: self.current_step().cloned(),
            step_duration: self.step_duration,
            time_remaining: self.time_remaining,
            completed: self.completed.clone(),
        }
    }

    /// Start or resume the countdown.
    ///
    /// No-op when running, finished, or when no time remains.
    pub fn start(&mut self) {
        if !matches!(self.state, SessionState::Idle | SessionState::Paused)
            || self.time_remaining.is_zero()
        {
            return;
        }

        self.state = SessionState::Running;
        let step_number = self.current_step_number();
        debug!(
            step = step_number,
            remaining_secs = self.time_remaining.as_secs(),
            "Step timer started"
        );
        self.publish(SessionEvent::StepStarted {
            step_number,
            remaining: self.time_remaining,
        });
    }

    /// One tick of the countdown; only meaningful while `Running`
    pub fn tick(&mut self) {
        if self.state != SessionState::Running || self.time_remaining.is_zero() {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(ONE_SECOND);
        let step_number = self.current_step_number();
        self.publish(SessionEvent::Ticked {
            step_number,
            remaining: self.time_remaining,
        });

        if self.time_remaining.is_zero() {
            self.complete_elapsed_step();
        }
    }

    /// Stop the countdown; idempotent
    pub fn pause(&mut self) {
        if self.state != SessionState::Running {
            return;
        }

        self.state = SessionState::Paused;
        self.publish(SessionEvent::Paused {
            step_number: self.current_step_number(),
            remaining: self.time_remaining,
        });
    }

    /// Mark the current step done and move on, auto-starting the next step
    pub fn advance(&mut self) {
        if self.state == SessionState::Finished {
            return;
        }

        self.pause();
        self.mark_current_completed();

        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            self.load_current_step();
            self.state = SessionState::Paused;
            self.start();
        } else {
            self.cursor = self.steps.len();
            self.step_duration = Duration::ZERO;
            self.time_remaining = Duration::ZERO;
            self.state = SessionState::Finished;
            info!(title = %self.title, steps = self.steps.len(), "Cooking session finished");
            self.publish(SessionEvent::Finished {
                completed: self.completed.clone(),
            });
        }
    }

    fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    fn current_step_number(&self) -> u32 {
        self.current_step().map_or(0, |step| step.number)
    }

    /// Recompute duration and countdown for the step under the cursor
    fn load_current_step(&mut self) {
        let fallback = self.settings.fallback_step;
        self.step_duration = self
            .current_step()
            .map_or(fallback, |step| parse_step_duration(&step.text).or_fallback(fallback));
        self.time_remaining = self.step_duration;
    }

    /// Countdown reached zero while running
    fn complete_elapsed_step(&mut self) {
        self.state = SessionState::Paused;
        let step_number = self.current_step_number();
        self.publish(SessionEvent::Paused {
            step_number,
            remaining: Duration::ZERO,
        });
        self.mark_current_completed();

        let notification = ScheduledNotification::step_complete(
            &self.title,
            step_number,
            self.settings.notification_delay,
        );
        if let Err(e) = self.notifier.schedule(&notification) {
            warn!(step = step_number, error = %e, "Failed to schedule step notification");
        }
    }

    /// Append the current step number to `completed` unless already present
    fn mark_current_completed(&mut self) {
        let Some(step_number) = self.current_step().map(|step| step.number) else {
            return;
        };
        if self.completed.contains(&step_number) {
            return;
        }

        self.completed.push(step_number);
        debug!(step = step_number, "Step completed");
        self.publish(SessionEvent::StepCompleted { step_number });
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
